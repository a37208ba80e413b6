//! Ranked word-frequency tables.
//!
//! A [`FrequencyTable`] is produced by a single stable sort on count, so
//! the full table and every top-N view share the same ordering: words with
//! equal counts keep the order in which they were first seen.

use serde::{Deserialize, Serialize};

use crate::analysis::counter::WordCounts;
use crate::config::ChartConfig;
use crate::error::{Result, WordFreqError};
use crate::frame::{Column, DataFrame};

/// A word and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u64,
}

impl FrequencyEntry {
    pub fn new<S: Into<String>>(word: S, count: u64) -> Self {
        FrequencyEntry {
            word: word.into(),
            count,
        }
    }
}

/// Words ordered by count descending, ties in first-seen order.
///
/// Tables are never mutated in place; slicing returns a new table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Rank counted words.
    pub fn from_counts(counts: WordCounts) -> Self {
        Self::rank(
            counts
                .into_entries()
                .into_iter()
                .map(|(word, count)| FrequencyEntry { word, count }),
        )
    }

    /// Rank `(word, count)` pairs given in first-seen order.
    ///
    /// Pairs must be unique by word.
    pub fn rank<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = FrequencyEntry>,
    {
        let mut entries: Vec<FrequencyEntry> = entries.into_iter().collect();
        // `sort_by` is stable, which gives the first-seen tie-break.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        FrequencyTable { entries }
    }

    /// The first `n` entries, or all of them if fewer exist.
    pub fn top_n(&self, n: usize) -> Result<FrequencyTable> {
        if n == 0 {
            return Err(WordFreqError::invalid_argument("top_n must be at least 1"));
        }
        Ok(FrequencyTable {
            entries: self.entries.iter().take(n).cloned().collect(),
        })
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for `word`, if present.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }

    /// Sum of all counts.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Words in rank order.
    pub fn words(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.word.clone()).collect()
    }

    /// Two-column frame (word label, count) named after the chart config.
    pub fn to_frame(&self, config: &ChartConfig) -> DataFrame {
        DataFrame::new(vec![
            Column::text(&config.word_column, self.words()),
            Column::numeric(
                &config.count_column,
                self.entries.iter().map(|entry| entry.count as f64).collect(),
            ),
        ])
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
