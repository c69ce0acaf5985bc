//! Relevance weights and per-entry scoring.
//!
//! All checks are case-insensitive substring containment against the
//! normalized query:
//! - 10: title contains the whole query
//! - 5: description contains the whole query
//! - 3 / 2: title / description contains a query word (per word)
//! - 4: a keyword contains the whole query (per keyword)
//! - 2: a keyword contains a query word (per keyword, per word)
//! - 3: category contains the whole query

use super::query::NormalizedQuery;
use crate::catalog::CatalogEntry;

const TITLE_PHRASE: u32 = 10;
const DESCRIPTION_PHRASE: u32 = 5;
const TITLE_WORD: u32 = 3;
const DESCRIPTION_WORD: u32 = 2;
const KEYWORD_PHRASE: u32 = 4;
const KEYWORD_WORD: u32 = 2;
const CATEGORY_PHRASE: u32 = 3;

/// Score one entry against a normalized query. Zero means no match.
pub fn score_entry(entry: &CatalogEntry, query: &NormalizedQuery) -> u32 {
    let title = entry.title.to_lowercase();
    let description = entry.description.to_lowercase();
    let category = entry.category.to_lowercase();

    let mut score = 0;

    if title.contains(&query.phrase) {
        score += TITLE_PHRASE;
    }
    if description.contains(&query.phrase) {
        score += DESCRIPTION_PHRASE;
    }

    for word in &query.words {
        if title.contains(word.as_str()) {
            score += TITLE_WORD;
        }
        if description.contains(word.as_str()) {
            score += DESCRIPTION_WORD;
        }
    }

    for keyword in &entry.keywords {
        let keyword = keyword.to_lowercase();
        if keyword.contains(&query.phrase) {
            score += KEYWORD_PHRASE;
        }
        score += KEYWORD_WORD
            * query
                .words
                .iter()
                .filter(|word| keyword.contains(word.as_str()))
                .count() as u32;
    }

    if category.contains(&query.phrase) {
        score += CATEGORY_PHRASE;
    }

    score
}
