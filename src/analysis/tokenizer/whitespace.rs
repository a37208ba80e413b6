//! Whitespace tokenizer for pre-segmented text.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode whitespace.
///
/// Useful when the text was segmented upstream and words are already
/// separated by spaces.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(WhitespaceTokens {
            text: text.to_owned(),
            cursor: 0,
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

/// Yields one token per whitespace-separated run, scanning on demand.
struct WhitespaceTokens {
    text: String,
    cursor: usize,
    position: usize,
}

impl Iterator for WhitespaceTokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = &self.text[self.cursor..];
        let start = self.cursor + rest.find(|c: char| !c.is_whitespace())?;
        let end = self.text[start..]
            .find(char::is_whitespace)
            .map_or(self.text.len(), |idx| start + idx);

        let token = Token::with_offsets(&self.text[start..end], self.position, start, end);
        self.cursor = end;
        self.position += 1;
        Some(token)
    }
}
