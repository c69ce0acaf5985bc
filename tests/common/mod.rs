//! Shared test fixtures for integration tests.
//!
//! Each test gets its own [`SiteState`] whose theme preference lives in a fresh
//! temporary directory, so theme changes never leak between tests or into the
//! user's real configuration.

use gantt_docs::theme::ThemeStore;
use gantt_docs::{Catalog, SampleLibrary, SiteState};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A site state backed by a temporary directory.
pub struct IsolatedSite {
    temp: TempDir,
    pub state: SiteState,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl IsolatedSite {
    /// Built-in catalog and samples, light theme unless `prefer_dark`.
    pub fn new(prefer_dark: bool) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let state = SiteState::new(
            Catalog::builtin().expect("built-in catalog"),
            SampleLibrary::builtin().expect("built-in samples"),
            ThemeStore::open(temp.path().join("theme.toml"), prefer_dark),
            10,
        );
        Self { temp, state }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn theme_file(&self) -> PathBuf {
        self.temp.path().join("theme.toml")
    }

    /// Write `contents` to `relative` inside the temp directory and return the full path.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }
}

/// Fixture: an isolated site with the built-in catalog and a light theme.
#[fixture]
pub fn isolated_site() -> IsolatedSite {
    gantt_docs::tracing::init();
    IsolatedSite::new(false)
}
