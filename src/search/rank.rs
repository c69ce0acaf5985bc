//! Ranking: score every entry, drop non-matches, order by relevance.

use super::query::NormalizedQuery;
use super::scoring::score_entry;
use crate::catalog::CatalogEntry;

/// A catalog entry paired with its score for one query.
///
/// Borrowed from the catalog and rebuilt on every call to [`rank`]; scores are
/// never cached or updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a CatalogEntry,
    pub score: u32,
}

/// Rank `catalog` against `query`.
///
/// A blank query returns every entry in catalog order with score 0. Otherwise only
/// entries with a positive score are returned, highest first; equal scores keep
/// their catalog order.
pub fn rank<'a>(catalog: &'a [CatalogEntry], query: &str) -> Vec<ScoredEntry<'a>> {
    let Some(query) = NormalizedQuery::parse(query) else {
        return catalog
            .iter()
            .map(|entry| ScoredEntry { entry, score: 0 })
            .collect();
    };

    let mut results: Vec<ScoredEntry<'a>> = catalog
        .iter()
        .map(|entry| ScoredEntry {
            entry,
            score: score_entry(entry, &query),
        })
        .filter(|scored| scored.score > 0)
        .collect();

    // `sort_by` is stable, which keeps ties in catalog order.
    results.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        query = %query.phrase,
        matches = results.len(),
        total = catalog.len(),
        "Ranked catalog"
    );

    results
}
