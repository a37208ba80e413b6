//! End-to-end analysis of one article.
//!
//! A run segments the text, filters and counts tokens, then ranks them once.
//! Both the full table and the top-N table come from that single ranking.
//! Runs share no state.

use std::sync::Arc;

use serde::Serialize;

use crate::analysis::counter::FrequencyCounter;
use crate::analysis::tokenizer::{LinderaTokenizer, Tokenizer};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::frequency::FrequencyTable;

/// Result of analysing one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Every kept word, ranked.
    pub full: FrequencyTable,
    /// Prefix of `full` with at most `top_n` entries.
    pub top: FrequencyTable,
    /// Tokens produced by the tokenizer.
    pub tokens_seen: usize,
    /// Tokens that passed the noise filter.
    pub tokens_kept: usize,
}

/// Runs the tokenize → filter → count → rank pipeline.
#[derive(Clone)]
pub struct Analyzer {
    tokenizer: Arc<dyn Tokenizer>,
    counter: FrequencyCounter,
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer with the given tokenizer and settings.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Analyzer {
            tokenizer,
            counter: FrequencyCounter::new(config.noise_filter()),
            config,
        })
    }

    /// Create an analyzer that segments Chinese with the embedded dictionary.
    pub fn chinese(config: AnalysisConfig) -> Result<Self> {
        Self::new(Arc::new(LinderaTokenizer::new()?), config)
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// Analyse `text`. Empty or whitespace-only text gives empty tables.
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let stream = self.tokenizer.tokenize(text)?;
        let counts = self.counter.count(stream);
        let tokens_seen = counts.tokens_seen();
        let tokens_kept = counts.tokens_kept();

        let full = FrequencyTable::from_counts(counts);
        let top = full.top_n(self.config.top_n)?;

        log::info!(
            "analysed {} tokens with {}: {} kept, {} distinct words",
            tokens_seen,
            self.tokenizer.name(),
            tokens_kept,
            full.len()
        );

        Ok(Analysis {
            full,
            top,
            tokens_seen,
            tokens_kept,
        })
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("config", &self.config)
            .finish()
    }
}
