//! Resolve a documentation section to its navigation target.

use crate::samples::normalize_language;
use crate::state::SiteState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct OpenSectionRequest {
    /// Section id, e.g. "gantt-chart" or "view-modes"
    pub id: String,
}

/// Describe where a section lives and which code samples it carries.
pub fn handle_open_section(
    state: &SiteState,
    request: &OpenSectionRequest,
) -> Result<String, String> {
    let catalog = state.catalog();
    let id = request.id.trim();

    let Some(entry) = catalog.get(id) else {
        let suggestions = catalog.suggest(id);
        let mut msg = format!("Section '{}' not found.", id);
        if suggestions.is_empty() {
            let available: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
            let _ = write!(msg, "\n\nAvailable sections: {}", available.join(", "));
        } else {
            msg.push_str(" Did you mean one of these?\n\n");
            for suggestion in suggestions {
                let _ = writeln!(msg, "• `{}` ({})", suggestion.id, suggestion.title);
            }
        }
        return Err(msg);
    };

    let target = entry.nav_target();
    let mut output = format!("# {}\n\n", entry.title);
    let _ = writeln!(output, "Category: {}", entry.category);
    let _ = writeln!(output, "Route: {}", target.route);
    if let Some(anchor) = &target.anchor {
        let _ = writeln!(output, "Anchor: #{} (scroll into view after navigating)", anchor);
    }
    let _ = writeln!(output, "\n{}", entry.description);

    let mut samples = state.samples().for_section(&entry.id).peekable();
    if samples.peek().is_some() {
        output.push_str("\nCode samples:\n");
        for sample in samples {
            let _ = writeln!(
                output,
                "- `{}`: {} ({})",
                sample.id,
                sample.title,
                normalize_language(&sample.language)
            );
        }
    }

    Ok(output)
}
