//! Shared state handed to every tool handler.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::samples::SampleLibrary;
use crate::theme::ThemeStore;
use anyhow::Context;

/// Everything the tools read: the immutable catalog and samples, plus the theme owner.
#[derive(Debug)]
pub struct SiteState {
    catalog: Catalog,
    samples: SampleLibrary,
    theme: ThemeStore,
    search_limit: usize,
}

impl SiteState {
    pub fn new(
        catalog: Catalog,
        samples: SampleLibrary,
        theme: ThemeStore,
        search_limit: usize,
    ) -> Self {
        for sample in samples.samples() {
            if catalog.get(&sample.section).is_none() {
                tracing::warn!(
                    "Code sample '{}' refers to section '{}', which is not in the catalog",
                    sample.id,
                    sample.section
                );
            }
        }

        Self {
            catalog,
            samples,
            theme,
            search_limit,
        }
    }

    /// Build state from configuration: catalog override or built-in table, built-in
    /// samples, and the theme store at the configured path.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
            None => Catalog::builtin().context("Built-in catalog is invalid")?,
        };
        let samples = SampleLibrary::builtin().context("Built-in code samples are invalid")?;
        let theme = ThemeStore::open(config.theme_path.clone(), config.prefer_dark);

        tracing::info!(
            "Serving {} sections and {} code samples (theme: {})",
            catalog.len(),
            samples.samples().len(),
            theme.current()
        );

        Ok(Self::new(catalog, samples, theme, config.search_limit))
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn samples(&self) -> &SampleLibrary {
        &self.samples
    }

    pub const fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub const fn search_limit(&self) -> usize {
        self.search_limit
    }
}
