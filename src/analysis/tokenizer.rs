//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that segment text into word tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Empty text yields an empty stream, not an error.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for logging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lindera;
pub mod whitespace;

pub use lindera::LinderaTokenizer;
pub use whitespace::WhitespaceTokenizer;
