// Feature section renderer
//
// Purpose: Render the homepage feature section for the docs site build
// Usage: cargo run --features cli --bin render_features > features.html

use anyhow::{bail, Context};
use homepage_features::catalog::{aurcache_catalog, CatalogSource, StaticAssetResolver};
use homepage_features::formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter, StyleSheet};
use homepage_features::render_feature_section;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the rendered document
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homepage_features=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Configuration from environment variables
    let catalog_path = std::env::var("FEATURES_CATALOG").ok();
    let format = std::env::var("FEATURES_FORMAT").unwrap_or_else(|_| "html".to_string());
    let asset_base = std::env::var("FEATURES_ASSET_BASE").unwrap_or_else(|_| "/".to_string());

    tracing::info!("Configuration:");
    tracing::info!("  FEATURES_CATALOG: {}", catalog_path.as_deref().unwrap_or("<built-in>"));
    tracing::info!("  FEATURES_FORMAT: {}", format);
    tracing::info!("  FEATURES_ASSET_BASE: {}", asset_base);

    let resolver = StaticAssetResolver::new(asset_base);
    let catalog = match &catalog_path {
        Some(path) => CatalogSource::from_path(path)
            .with_context(|| format!("loading catalog {}", path))?
            .resolve(&resolver)
            .with_context(|| format!("resolving catalog {}", path))?,
        None => aurcache_catalog(&resolver).context("resolving built-in catalog")?,
    };
    tracing::info!("Loaded catalog with {} entries", catalog.len());

    let section = render_feature_section(catalog.entries()).context("rendering feature section")?;

    let output = match format.as_str() {
        "html" => HtmlFormatter::format(&section, &StyleSheet::docusaurus()),
        "markdown" | "md" => MarkdownFormatter::format(&section),
        "json" => JsonFormatter::format(&section)?,
        other => bail!("unknown FEATURES_FORMAT {:?} (expected html, markdown or json)", other),
    };

    print!("{}", output);
    tracing::info!("Rendered {} rows as {}", section.len(), format);
    Ok(())
}
