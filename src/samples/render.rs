//! Rendering code samples as Markdown fenced blocks.

use super::CodeSample;
use crate::theme::Theme;
use std::borrow::Cow;
use std::fmt::Write as _;

/// Short language names and the highlighter grammar they map to.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("jsx", "jsx"),
    ("tsx", "tsx"),
    ("bash", "bash"),
    ("sh", "bash"),
    ("json", "json"),
    ("py", "python"),
    ("python", "python"),
    ("html", "html"),
    ("css", "css"),
];

/// Map a language shortcut to its highlighter name. Unknown names pass through untouched.
pub fn normalize_language(language: &str) -> Cow<'_, str> {
    let lower = language.to_lowercase();
    LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map_or(Cow::Borrowed(language), |(_, name)| Cow::Borrowed(*name))
}

/// How a sample should be rendered.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub line_numbers: bool,
    pub caption: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            line_numbers: true,
            caption: None,
        }
    }
}

/// Render a sample as a fenced block tagged with its normalized language.
pub fn render_sample(sample: &CodeSample, options: &RenderOptions) -> String {
    let mut output = format!("<!-- theme: {} -->\n", options.theme);

    if let Some(caption) = &options.caption {
        let _ = writeln!(output, "**{}**\n", caption);
    }

    let language = normalize_language(&sample.language);
    let _ = writeln!(output, "```{}", language);

    let line_count = sample.code.lines().count();
    let width = line_count.to_string().len();
    for (index, line) in sample.code.lines().enumerate() {
        if options.line_numbers {
            let _ = writeln!(output, "{:>width$} | {}", index + 1, line, width = width);
        } else {
            let _ = writeln!(output, "{}", line);
        }
    }

    output.push_str("```\n");
    output
}
