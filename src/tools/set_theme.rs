//! Read or change the theme preference.

use crate::state::SiteState;
use crate::theme::Theme;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Requested theme change.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    Toggle,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SetThemeRequest {
    /// "light", "dark" or "toggle"; omit to report the current theme
    #[serde(default)]
    pub mode: Option<ThemeMode>,
}

pub fn handle_set_theme(state: &SiteState, request: &SetThemeRequest) -> Result<String, String> {
    let store = state.theme();

    let theme = match request.mode {
        None => Ok(store.current()),
        Some(ThemeMode::Light) => store.set(Theme::Light),
        Some(ThemeMode::Dark) => store.set(Theme::Dark),
        Some(ThemeMode::Toggle) => store.toggle(),
    }
    .map_err(|e| format!("Failed to update theme: {}", e))?;

    let mut output = if request.mode.is_some() {
        format!(
            "Theme set to {} (saved to {})\n\n",
            theme,
            store.path().display()
        )
    } else {
        format!("Current theme: {}\n\n", theme)
    };

    output.push_str("Palette:\n");
    for (name, value) in theme.palette().tokens() {
        let _ = writeln!(output, "  {}: {}", name, value);
    }

    Ok(output)
}
