//! The documentation catalog: the fixed table of site sections that search runs over.
//!
//! A [`Catalog`] is built once and never mutated. The built-in table is embedded from
//! `data/catalog.toml`; deployments can point the server at their own file with the
//! same `[[entry]]` layout.

use crate::error::CatalogError;
use crate::navigation::NavTarget;
use crate::search::{self, ScoredEntry};
use rapidfuzz::distance::jaro_winkler;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Minimum Jaro-Winkler similarity for an id to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 3;

/// Section categories, in the order the search results are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    GettingStarted,
    Components,
    Api,
    Features,
    Examples,
    Support,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 6] = [
        Self::GettingStarted,
        Self::Components,
        Self::Api,
        Self::Features,
        Self::Examples,
        Self::Support,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::GettingStarted => "Getting Started",
            Self::Components => "Components",
            Self::Api => "API",
            Self::Features => "Features",
            Self::Examples => "Examples",
            Self::Support => "Support",
        }
    }

    /// Exact label lookup. Labels outside the fixed set yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One searchable documentation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    /// Route to navigate to, optionally with a `#anchor`.
    pub path: String,
    /// Category label. Kept as text so that catalogs with unknown labels still load.
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl CatalogEntry {
    /// The entry's category, if its label is one of the known ones.
    pub fn category(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    pub fn nav_target(&self) -> NavTarget {
        NavTarget::parse(&self.path)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entry: Vec<CatalogEntry>,
}

/// Immutable, validated set of documentation entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        validate_ids(entries.iter().map(|entry| entry.id.as_str()))?;
        Ok(Self { entries })
    }

    /// The site's own documentation sections.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.entry)
    }

    /// Load a catalog from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::info!(
            "Loaded {} catalog entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Rank the catalog against a query. See [`search::rank`].
    pub fn search(&self, query: &str) -> Vec<ScoredEntry<'_>> {
        search::rank(&self.entries, query)
    }

    /// Entries whose id looks like `id`, most similar first.
    pub fn suggest(&self, id: &str) -> Vec<&CatalogEntry> {
        let needle = id.trim().to_lowercase();
        let mut scored: Vec<(f64, &CatalogEntry)> = self
            .entries
            .iter()
            .map(|entry| {
                (
                    jaro_winkler::similarity(needle.chars(), entry.id.chars()),
                    entry,
                )
            })
            .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, entry)| entry)
            .collect()
    }
}

/// Reject empty or repeated ids, reporting the first offender.
pub(crate) fn validate_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyId(index));
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}
