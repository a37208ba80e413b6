//! # wordfreq
//!
//! Word-frequency analysis for Chinese text, with chart specifications for
//! displaying the result.
//!
//! ## Features
//!
//! - Dictionary-based segmentation of text without word delimiters
//! - Noise filtering of single characters, punctuation and whitespace
//! - One ranking pass shared by the full table and its top-N view
//! - Seven chart kinds, each built by a pure function from the ranked table
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use wordfreq::{AnalysisConfig, Analyzer, ChartConfig, ChartKind, ChartRequest};
//! use wordfreq::analysis::WhitespaceTokenizer;
//!
//! let analyzer = Analyzer::new(Arc::new(WhitespaceTokenizer::new()), AnalysisConfig::default())?;
//! let analysis = analyzer.analyze("老鼠 喜欢 奶酪 。 老鼠 喜欢 追逐")?;
//! assert_eq!(analysis.full.entries()[0].word, "老鼠");
//!
//! let spec = wordfreq::dispatch(
//!     &ChartRequest::new(ChartKind::Bar),
//!     &analysis.full,
//!     &ChartConfig::default(),
//! )?;
//! assert_eq!(spec.mark_count(), 4);
//! # Ok::<(), wordfreq::WordFreqError>(())
//! ```

pub mod analysis;
pub mod chart;
pub mod config;
mod error;
pub mod frame;
pub mod frequency;
mod pipeline;

// Re-exports for the public API
pub use chart::{ChartKind, ChartRequest, ChartSpec, dispatch, dispatch_str};
pub use config::{AnalysisConfig, ChartConfig, DEFAULT_TOP_N};
pub use error::{Result, WordFreqError};
pub use frame::{DataFrame, Matrix};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use pipeline::{Analysis, Analyzer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
