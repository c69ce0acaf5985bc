//! Query normalization.

/// A search query after trimming and lowercasing.
///
/// `phrase` is the whole query; `words` are its whitespace-separated pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub phrase: String,
    pub words: Vec<String>,
}

impl NormalizedQuery {
    /// Normalize raw user input. Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let phrase = raw.trim().to_lowercase();
        if phrase.is_empty() {
            return None;
        }

        let words = phrase.split_whitespace().map(str::to_string).collect();
        Some(Self { phrase, words })
    }
}
