pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod navigation;
pub mod samples;
pub mod search;
pub mod server;
pub mod state;
pub mod theme;
pub mod tools;
pub mod tracing;

pub use catalog::{Catalog, CatalogEntry, Category};
pub use config::Config;
pub use navigation::NavTarget;
pub use samples::{CodeSample, SampleLibrary};
pub use search::{CategoryGroup, ScoredEntry, group_by_category, rank};
pub use server::DocsServer;
pub use state::SiteState;
pub use theme::{Palette, Theme, ThemeStore};
