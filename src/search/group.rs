//! Grouping ranked results by category for display.

use super::rank::ScoredEntry;
use crate::catalog::Category;

/// Ranked entries that share one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub entries: Vec<ScoredEntry<'a>>,
}

/// Partition ranked results by [`Category::ALL`] order.
///
/// Rank order is preserved inside each group and categories without results are
/// omitted. Entries whose category label is not a known one are dropped with a
/// warning.
pub fn group_by_category<'a>(results: &[ScoredEntry<'a>]) -> Vec<CategoryGroup<'a>> {
    for scored in results {
        if scored.entry.category().is_none() {
            tracing::warn!(
                id = %scored.entry.id,
                category = %scored.entry.category,
                "Dropping search result with unknown category"
            );
        }
    }

    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let entries: Vec<ScoredEntry<'a>> = results
                .iter()
                .filter(|scored| scored.entry.category() == Some(category))
                .copied()
                .collect();
            (!entries.is_empty()).then_some(CategoryGroup { category, entries })
        })
        .collect()
}
