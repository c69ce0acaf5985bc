//! Ranked search over the documentation catalog.
//!
//! Scoring is additive: each independent substring signal (title, description,
//! keywords, category) contributes a fixed weight. Ranking is a pure function of
//! the catalog and the query, recomputed by the caller whenever the query changes.

// Module declarations
pub(crate) mod group;
pub(crate) mod query;
pub(crate) mod rank;
pub(crate) mod scoring;

// Public re-exports (used via lib.rs)
pub use group::{CategoryGroup, group_by_category};
pub use query::NormalizedQuery;
pub use rank::{ScoredEntry, rank};
pub use scoring::score_entry;
