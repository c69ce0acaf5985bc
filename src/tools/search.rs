//! Ranked search handler for the documentation catalog.

use crate::search::{group_by_category, rank};
use crate::state::SiteState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query; empty lists every section
    #[serde(default)]
    pub query: String,
    /// Maximum number of ranked results (default: server setting, usually 10)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Rank the catalog and render the matches grouped by category.
pub fn handle_search(state: &SiteState, request: &SearchRequest) -> Result<String, String> {
    let catalog = state.catalog();
    let query = request.query.trim();
    let mut results = rank(catalog.entries(), query);

    if query.is_empty() {
        let mut output = format!("Documentation sections ({}):\n", results.len());
        for group in group_by_category(&results) {
            let _ = write!(output, "\n## {}\n", group.category);
            for scored in &group.entries {
                let entry = scored.entry;
                let _ = writeln!(
                    output,
                    "- **{}** (`{}`) - {}",
                    entry.title, entry.path, entry.description
                );
            }
        }
        return Ok(output);
    }

    if results.is_empty() {
        let mut msg = format!(
            "No results found for '{}'. Try a different search term.\n\n",
            query
        );
        msg.push_str("Search tips:\n");
        msg.push_str("• Try a shorter or more general term\n");
        msg.push_str("• Search for features like 'view modes', 'events', 'styling'\n");
        msg.push_str("• Leave the query empty to list every section\n");
        return Ok(msg);
    }

    let total = results.len();
    let limit = request.limit.unwrap_or_else(|| state.search_limit()).max(1);
    results.truncate(limit);

    let mut output = format!("Search results for '{}'", query);
    if total > results.len() {
        let _ = write!(output, " (top {} of {})", results.len(), total);
    } else {
        let _ = write!(output, " ({} matches)", total);
    }
    output.push_str(":\n");

    for group in group_by_category(&results) {
        let _ = write!(output, "\n## {}\n", group.category);
        for scored in &group.entries {
            let entry = scored.entry;
            let _ = writeln!(
                output,
                "- **{}** (`{}`) - {} [score {}]",
                entry.title, entry.path, entry.description, scored.score
            );
        }
    }

    Ok(output)
}
