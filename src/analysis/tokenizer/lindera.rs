//! Dictionary-based segmentation for Chinese text backed by Lindera.
//!
//! Chinese has no spaces between words, so tokens are found by a
//! minimum-cost path over the embedded CC-CEDICT lexicon.

use lindera::dictionary::load_dictionary;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer as InnerTokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, WordFreqError};

/// URI of the dictionary compiled into the binary.
const CC_CEDICT_URI: &str = "embedded://cc-cedict";

/// A tokenizer that segments Chinese text with the CC-CEDICT dictionary.
pub struct LinderaTokenizer {
    inner: InnerTokenizer,
}

impl LinderaTokenizer {
    /// Create a tokenizer over the embedded CC-CEDICT dictionary.
    pub fn new() -> Result<Self> {
        Self::with_dictionary(CC_CEDICT_URI)
    }

    /// Create a tokenizer from a dictionary URI understood by Lindera,
    /// e.g. `embedded://cc-cedict` or a path to a compiled dictionary.
    pub fn with_dictionary(uri: &str) -> Result<Self> {
        let dictionary = load_dictionary(uri).map_err(|e| {
            WordFreqError::analysis(format!("Failed to load dictionary '{uri}': {e}"))
        })?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);

        Ok(LinderaTokenizer {
            inner: InnerTokenizer::new(segmenter),
        })
    }
}

/// Byte range of `surface` in `text`, searching from `cursor`.
///
/// Surfaces are consecutive slices of the input. A surface that cannot be
/// found gets an empty range at `cursor`, which stays on a char boundary.
fn locate(text: &str, cursor: usize, surface: &str) -> (usize, usize) {
    match text[cursor..].find(surface) {
        Some(idx) => {
            let start = cursor + idx;
            (start, start + surface.len())
        }
        None => (cursor, cursor),
    }
}

impl Tokenizer for LinderaTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        if text.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let segmented = self
            .inner
            .tokenize(text)
            .map_err(|e| WordFreqError::analysis(format!("Failed to segment text: {e}")))?;

        let mut cursor = 0;
        let tokens: Vec<Token> = segmented
            .iter()
            .enumerate()
            .map(|(position, token)| {
                let surface: &str = &token.surface;
                let (start, end) = locate(text, cursor, surface);
                cursor = end;
                Token::with_offsets(surface, position, start, end)
            })
            .collect();

        log::debug!("{} produced {} tokens", self.name(), tokens.len());

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_consecutive_surfaces() {
        let text = "猫和老鼠";
        let (start, end) = locate(text, 0, "猫");
        assert_eq!((start, end), (0, 3));
        let (start, end) = locate(text, end, "和");
        assert_eq!((start, end), (3, 6));
        assert_eq!(locate(text, end, "老鼠"), (6, 12));
    }

    #[test]
    fn test_locate_missing_surface_keeps_char_boundary() {
        let text = "猫和老鼠";
        let (start, end) = locate(text, 3, "ab");
        assert_eq!((start, end), (3, 3));
        assert!(text.is_char_boundary(end));
        // The next lookup from the unchanged cursor still succeeds.
        assert_eq!(locate(text, end, "和"), (3, 6));
    }
}
