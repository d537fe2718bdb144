// ABOUTME: Summary rows for the display settings overview
// ABOUTME: Category descriptor, summary items and word-boundary truncation

use crate::section::Section;
use serde::{Deserialize, Serialize};

pub const SUMMARY_CATEGORY: &str = "vizzini";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryColumn {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCategory {
    pub id: String,
    pub title: String,
    pub column: SummaryColumn,
}

impl Default for SummaryCategory {
    fn default() -> Self {
        Self {
            id: SUMMARY_CATEGORY.to_string(),
            title: "Vizzini Settings".to_string(),
            column: SummaryColumn::Second,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub section: Section,
    pub category: String,
    pub title: String,
    pub value: String,
}

impl SummaryItem {
    pub fn new(section: Section, value: impl Into<String>) -> Self {
        Self {
            section,
            category: SUMMARY_CATEGORY.to_string(),
            title: section.summary_title().to_string(),
            value: value.into(),
        }
    }
}

/// Byte offsets where words start. A word starts on a letter and may
/// continue through apostrophes and hyphens; digits are not words.
fn word_starts(text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_word = false;
    for (offset, c) in text.char_indices() {
        let word_char = c.is_alphabetic() || (in_word && (c == '\'' || c == '-'));
        if word_char && !in_word {
            starts.push(offset);
        }
        in_word = word_char;
    }
    starts
}

/// Keep the first `max_words` words and append "..." when more follow.
///
/// The cut happens where the next word starts, so words are never split;
/// trailing whitespace before the cut is dropped.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let max_words = max_words.max(1);
    let starts = word_starts(text);
    if starts.len() <= max_words {
        return text.to_string();
    }

    let kept = text[..starts[max_words]].trim_end();
    format!("{}...", kept)
}
