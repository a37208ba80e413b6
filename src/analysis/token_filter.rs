//! Noise filtering applied before counting.

use ahash::AHashSet;

use crate::analysis::token::Token;

/// Tokens dropped regardless of length once trimmed.
pub const DEFAULT_NOISE: &[&str] = &[
    "\n", "...", " ", "。", ",", "，", "！", "：", "；", "(", ")", "“", "”",
];

/// Minimum number of characters a trimmed token needs to be kept.
pub const DEFAULT_MIN_CHARS: usize = 2;

/// Drops single characters, punctuation and whitespace tokens.
///
/// A token is kept iff its trimmed text has at least `min_chars` characters
/// and does not exactly match an entry in the noise set. Matching is
/// case-sensitive with no normalization.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    noise: AHashSet<String>,
    min_chars: usize,
}

impl NoiseFilter {
    /// Create a filter from a noise set and a minimum length in characters.
    pub fn new<I, S>(noise: I, min_chars: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NoiseFilter {
            noise: noise.into_iter().map(Into::into).collect(),
            min_chars,
        }
    }

    /// Whether the given text survives the filter.
    pub fn accepts(&self, text: &str) -> bool {
        let trimmed = text.trim();
        trimmed.chars().count() >= self.min_chars && !self.noise.contains(trimmed)
    }

    /// Whether the token survives the filter.
    pub fn keep(&self, token: &Token) -> bool {
        self.accepts(token.text())
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Whether the exact text is a member of the noise set.
    pub fn is_noise(&self, text: &str) -> bool {
        self.noise.contains(text)
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        NoiseFilter::new(DEFAULT_NOISE.iter().copied(), DEFAULT_MIN_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_characters_dropped() {
        let filter = NoiseFilter::default();
        assert!(!filter.accepts("猫"));
        assert!(!filter.accepts("a"));
        assert!(!filter.accepts(" 追 "));
        assert!(!filter.accepts(""));
        assert!(filter.accepts("老鼠"));
    }

    #[test]
    fn test_noise_set_dropped_after_trim() {
        let filter = NoiseFilter::default();
        assert!(!filter.accepts("..."));
        assert!(!filter.accepts(" ... "));
        assert!(!filter.accepts("\n\n"));
        assert!(!filter.accepts("  "));
        assert!(filter.accepts("...."));
    }

    #[test]
    fn test_exact_match_only() {
        let filter = NoiseFilter::new(["Rust"], 2);
        assert!(!filter.accepts("Rust"));
        assert!(filter.accepts("rust"));
        assert!(filter.accepts("Rusty"));
    }

    #[test]
    fn test_custom_min_chars() {
        let filter = NoiseFilter::new(Vec::<String>::new(), 3);
        assert!(!filter.accepts("老鼠"));
        assert!(filter.accepts("大老鼠"));
        assert_eq!(filter.min_chars(), 3);
    }

    #[test]
    fn test_keep_token() {
        let filter = NoiseFilter::default();
        assert!(filter.keep(&Token::new("奶酪", 0)));
        assert!(!filter.keep(&Token::new("。", 1)));
    }
}
