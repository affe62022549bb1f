//! Asset resolution.
//!
//! Authored catalogs reference images by site path. Before rendering, every
//! reference is turned into an [`ImageRef`] by an [`AssetResolver`]; a
//! reference that cannot be resolved is an authoring defect.

use std::collections::BTreeSet;

use crate::catalog::types::ImageRef;

/// Turns an authored image reference into a resolved handle.
pub trait AssetResolver {
    fn resolve(&self, reference: &str) -> Option<ImageRef>;
}

impl<F> AssetResolver for F
where
    F: Fn(&str) -> Option<ImageRef>,
{
    fn resolve(&self, reference: &str) -> Option<ImageRef> {
        self(reference)
    }
}

/// Prefix used by site sources to point into the static asset directory.
const SITE_STATIC_PREFIX: &str = "@site/static/";

/// Resolves static-site asset paths against a public base URL.
///
/// Accepted forms: `@site/static/img/a.png`, `/img/a.png`, `img/a.png`.
/// Absolute `http(s)://` URLs pass through untouched. When a set of known
/// assets is configured, site paths outside that set are unresolved.
#[derive(Debug, Clone)]
pub struct StaticAssetResolver {
    base_url: String,
    known_assets: Option<BTreeSet<String>>,
}

impl StaticAssetResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            known_assets: None,
        }
    }

    /// Restrict resolution to the given site-relative paths (e.g. `img/a.png`).
    pub fn with_known_assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_assets = Some(
            assets
                .into_iter()
                .map(|a| {
                    let path: String = a.into();
                    path.trim_start_matches('/').to_string()
                })
                .collect(),
        );
        self
    }

    fn join(&self, relative: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/{}", base, relative)
    }
}

impl Default for StaticAssetResolver {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AssetResolver for StaticAssetResolver {
    fn resolve(&self, reference: &str) -> Option<ImageRef> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        if reference.starts_with("https://") || reference.starts_with("http://") {
            return Some(ImageRef::new(reference));
        }

        let relative = reference
            .strip_prefix(SITE_STATIC_PREFIX)
            .unwrap_or(reference)
            .trim_start_matches('/');

        if relative.is_empty() || relative.split('/').any(|part| part == "..") {
            return None;
        }

        if let Some(known) = &self.known_assets {
            if !known.contains(relative) {
                return None;
            }
        }

        Some(ImageRef::new(self.join(relative)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_static_prefix_is_stripped() {
        let resolver = StaticAssetResolver::default();
        assert_eq!(
            resolver.resolve("@site/static/img/screenshot1.png"),
            Some(ImageRef::new("/img/screenshot1.png"))
        );
        assert_eq!(resolver.resolve("img/a.png"), Some(ImageRef::new("/img/a.png")));
        assert_eq!(resolver.resolve("/img/a.png"), Some(ImageRef::new("/img/a.png")));
    }

    #[test]
    fn test_base_url_is_joined() {
        let resolver = StaticAssetResolver::new("https://docs.example.org/aurcache/");
        assert_eq!(
            resolver.resolve("img/a.png"),
            Some(ImageRef::new("https://docs.example.org/aurcache/img/a.png"))
        );
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let resolver = StaticAssetResolver::new("/base");
        assert_eq!(
            resolver.resolve("https://cdn.example.org/a.png"),
            Some(ImageRef::new("https://cdn.example.org/a.png"))
        );
    }

    #[test]
    fn test_rejects_empty_and_parent_paths() {
        let resolver = StaticAssetResolver::default();
        assert_eq!(resolver.resolve(""), None);
        assert_eq!(resolver.resolve("@site/static/"), None);
        assert_eq!(resolver.resolve("../secret.png"), None);
        assert_eq!(resolver.resolve("img/../../x.png"), None);
    }

    #[test]
    fn test_known_assets_restrict_resolution() {
        let resolver = StaticAssetResolver::default().with_known_assets(["img/a.png", "/img/b.png"]);
        assert!(resolver.resolve("@site/static/img/a.png").is_some());
        assert!(resolver.resolve("img/b.png").is_some());
        assert_eq!(resolver.resolve("img/c.png"), None);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |r: &str| (r == "ok").then(|| ImageRef::new("/ok.png"));
        assert_eq!(resolver.resolve("ok"), Some(ImageRef::new("/ok.png")));
        assert_eq!(resolver.resolve("nope"), None);
    }
}
