//! Render a code sample in the current theme.

use crate::samples::{RenderOptions, render_sample};
use crate::state::SiteState;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetExampleRequest {
    /// Code sample id, e.g. "installation" or "core-props"
    pub id: String,
    /// Prefix each line with its number (default: true)
    #[serde(default = "default_line_numbers")]
    pub line_numbers: bool,
}

const fn default_line_numbers() -> bool {
    true
}

pub fn handle_get_example(
    state: &SiteState,
    request: &GetExampleRequest,
) -> Result<String, String> {
    let samples = state.samples();
    let id = request.id.trim();

    let sample = samples.get(id).ok_or_else(|| {
        let available: Vec<&str> = samples.ids().collect();
        format!(
            "Code sample '{}' not found.\n\nAvailable samples: {}",
            id,
            available.join(", ")
        )
    })?;

    let options = RenderOptions {
        theme: state.theme().current(),
        line_numbers: request.line_numbers,
        caption: Some(sample.title.clone()),
    };

    let mut output = String::new();
    if let Some(description) = &sample.description {
        output.push_str(description);
        output.push_str("\n\n");
    }
    output.push_str(&render_sample(sample, &options));
    Ok(output)
}
