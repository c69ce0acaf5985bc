//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for gantt-docs operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a documentation catalog or sample table cannot be built.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two entries share the same id.
    #[error("duplicate catalog id '{0}'")]
    DuplicateId(String),
    /// An entry has an empty (or whitespace-only) id.
    #[error("catalog entry #{0} has an empty id")]
    EmptyId(usize),
    /// The TOML source could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    /// The catalog file could not be read.
    #[error("failed to read catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error returned when the theme preference cannot be parsed or persisted.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown theme '{0}' (expected 'light' or 'dark')")]
    Unknown(String),
    #[error("failed to write theme preference to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize theme preference: {0}")]
    Serialize(#[from] toml::ser::Error),
}
