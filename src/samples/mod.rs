//! Code samples attached to documentation sections.

mod render;

pub use render::{RenderOptions, normalize_language, render_sample};

use crate::catalog::validate_ids;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

const BUILTIN_SAMPLES: &str = include_str!("../../data/samples.toml");

/// A code listing shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub id: String,
    /// Id of the catalog entry this sample belongs to.
    pub section: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub language: String,
    pub code: String,
}

#[derive(Deserialize)]
struct SampleFile {
    #[serde(default)]
    sample: Vec<CodeSample>,
}

/// All known code samples, in display order.
#[derive(Debug, Clone, Default)]
pub struct SampleLibrary {
    samples: Vec<CodeSample>,
}

impl SampleLibrary {
    pub fn new(samples: Vec<CodeSample>) -> Result<Self, CatalogError> {
        validate_ids(samples.iter().map(|sample| sample.id.as_str()))?;
        Ok(Self { samples })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        let file: SampleFile = toml::from_str(BUILTIN_SAMPLES)?;
        Self::new(file.sample)
    }

    pub fn samples(&self) -> &[CodeSample] {
        &self.samples
    }

    pub fn get(&self, id: &str) -> Option<&CodeSample> {
        self.samples.iter().find(|sample| sample.id == id)
    }

    /// Samples shown in the given catalog section.
    pub fn for_section<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a CodeSample> {
        self.samples
            .iter()
            .filter(move |sample| sample.section == section)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.samples.iter().map(|sample| sample.id.as_str())
    }
}
