//! Counting of filtered tokens in first-seen order.

use ahash::AHashMap;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::NoiseFilter;

/// Word counts in the order each word was first seen.
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    entries: Vec<(String, u64)>,
    index: AHashMap<String, usize>,
    tokens_seen: usize,
    tokens_kept: usize,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one kept occurrence of `word`. Callers count the token as
    /// seen first, so `tokens_kept <= tokens_seen` holds.
    fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
        self.tokens_kept += 1;
    }

    /// Count for `word`, if it was seen.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Distinct words with their counts, in first-seen order.
    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(String, u64)> {
        self.entries
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tokens read from the stream, before filtering.
    pub fn tokens_seen(&self) -> usize {
        self.tokens_seen
    }

    /// Tokens that passed the filter; equals the sum of all counts.
    pub fn tokens_kept(&self) -> usize {
        self.tokens_kept
    }
}

/// Applies a [`NoiseFilter`] to a token stream and counts what remains.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter {
    filter: NoiseFilter,
}

impl FrequencyCounter {
    pub fn new(filter: NoiseFilter) -> Self {
        FrequencyCounter { filter }
    }

    pub fn filter(&self) -> &NoiseFilter {
        &self.filter
    }

    /// Consume the stream and count the kept tokens.
    ///
    /// Words are stored untrimmed; trimming only decides whether a token
    /// is kept.
    pub fn count(&self, stream: TokenStream) -> WordCounts {
        let mut counts = WordCounts::new();
        for token in stream {
            counts.tokens_seen += 1;
            if self.filter.keep(&token) {
                counts.add(token.text());
            }
        }

        log::debug!(
            "counted {} tokens, kept {}, {} distinct words",
            counts.tokens_seen,
            counts.tokens_kept,
            counts.len()
        );

        counts
    }
}
