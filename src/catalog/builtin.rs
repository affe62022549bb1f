//! Built-in AURCache homepage catalog.

use crate::catalog::assets::AssetResolver;
use crate::catalog::source::{CatalogError, CatalogSource, EntrySource};
use crate::catalog::types::EntryCatalog;

const AURCACHE_FEATURES: &[(&str, &str, &str)] = &[
    (
        "Comprehensive Dashboard",
        "@site/static/img/screenshot1.png",
        "AURCache provides a comprehensive dashboard that gives you a great overview of your \
         repository status. You can easily monitor package versions, build statuses, and \
         repository health at a glance, ensuring you stay informed about the state of your packages.",
    ),
    (
        "Detailed Build Logs",
        "@site/static/img/screenshot2.png",
        "The build output page in AURCache provides detailed logs for each package build. You can \
         easily track build progress, view logs, and diagnose issues. This feature helps you \
         maintain control over the build process and quickly address any problems that arise.",
    ),
    (
        "User-Friendly Interface",
        "@site/static/img/screenshot3.png",
        "With its clear and concise Flutter frontend, AURCache is designed to be easy to use.\n\
         Adding and Managing packages is straightforward, letting you focus on development \
         without complex processes.\n\
         Under the hood, the robust Rust backend guarantees stability and performance, providing \
         a reliable foundation for all your repository needs.",
    ),
];

/// Unresolved source of the AURCache homepage features.
pub fn aurcache_source() -> CatalogSource {
    CatalogSource {
        entries: AURCACHE_FEATURES
            .iter()
            .map(|(title, image, description)| EntrySource {
                title: Some(title.to_string()),
                image: Some(image.to_string()),
                description: Some(description.to_string()),
            })
            .collect(),
    }
}

/// The AURCache homepage catalog with images resolved by `resolver`.
pub fn aurcache_catalog<R>(resolver: &R) -> Result<EntryCatalog, CatalogError>
where
    R: AssetResolver + ?Sized,
{
    aurcache_source().resolve(resolver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::assets::StaticAssetResolver;

    #[test]
    fn test_aurcache_catalog_resolves() {
        let catalog = aurcache_catalog(&StaticAssetResolver::default()).unwrap();
        let titles: Vec<&str> = catalog.iter().map(|e| e.title()).collect();
        assert_eq!(
            titles,
            vec!["Comprehensive Dashboard", "Detailed Build Logs", "User-Friendly Interface"]
        );
        assert_eq!(catalog.entries()[2].image().as_str(), "/img/screenshot3.png");
    }

    #[test]
    fn test_multiline_description_reads_as_one_paragraph() {
        let catalog = aurcache_catalog(&StaticAssetResolver::default()).unwrap();
        let text = catalog.entries()[2].description().plain_text();
        assert!(text.contains("easy to use. Adding and Managing"));
        assert!(!text.contains('\n'));
    }
}
