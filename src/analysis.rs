//! Text analysis for word-frequency counting.
//!
//! This module turns raw article text into counted words:
//!
//! - **Tokenizers**: segment text into a stream of word tokens
//! - **Token filter**: drop single characters, punctuation and whitespace
//! - **Counter**: count the surviving tokens in first-seen order
//!
//! # Architecture
//!
//! ```text
//! Text → Tokenizer → Token Stream → Noise Filter → Counter → Word Counts
//! ```
//!
//! # Examples
//!
//! ```
//! use wordfreq::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
//! use wordfreq::analysis::counter::FrequencyCounter;
//! use wordfreq::analysis::token_filter::NoiseFilter;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let stream = tokenizer.tokenize("老鼠 喜欢 奶酪 。 老鼠").unwrap();
//! let counts = FrequencyCounter::new(NoiseFilter::default()).count(stream);
//! assert_eq!(counts.get("老鼠"), Some(2));
//! ```

pub mod counter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-exports
pub use counter::{FrequencyCounter, WordCounts};
pub use token::{Token, TokenStream};
pub use token_filter::NoiseFilter;
pub use tokenizer::{LinderaTokenizer, Tokenizer, WhitespaceTokenizer};
