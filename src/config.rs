//! Configuration for analysis runs and chart building.
//!
//! Rendering settings are passed explicitly to every chart builder instead
//! of living in process-wide state, so builders stay pure.

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::{DEFAULT_MIN_CHARS, DEFAULT_NOISE, NoiseFilter};
use crate::chart::kind::ChartKind;
use crate::error::{Result, WordFreqError};

/// Number of entries shown in the top-N table and charts.
pub const DEFAULT_TOP_N: usize = 20;

/// Settings for segmentation, filtering and ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Size of the top-N slice. Must be at least 1.
    pub top_n: usize,
    /// Trimmed tokens equal to one of these are discarded.
    pub noise: Vec<String>,
    /// Trimmed tokens shorter than this many characters are discarded.
    pub min_chars: usize,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        AnalysisConfig {
            top_n: DEFAULT_TOP_N,
            noise: DEFAULT_NOISE.iter().map(|s| s.to_string()).collect(),
            min_chars: DEFAULT_MIN_CHARS,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_noise<I, S>(mut self, noise: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise = noise.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Check the settings before starting a run.
    ///
    /// The filter can be made stricter than the default but not looser:
    /// kept words are always at least two characters and never a default
    /// noise entry.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(WordFreqError::invalid_argument("top_n must be at least 1"));
        }
        if self.min_chars < DEFAULT_MIN_CHARS {
            return Err(WordFreqError::invalid_argument(format!(
                "min_chars must be at least {DEFAULT_MIN_CHARS}, got {}",
                self.min_chars
            )));
        }
        if let Some(missing) = DEFAULT_NOISE
            .iter()
            .find(|entry| !self.noise.iter().any(|n| n == *entry))
        {
            return Err(WordFreqError::invalid_argument(format!(
                "noise set must keep the default entry {missing:?}"
            )));
        }
        Ok(())
    }

    /// Build the token filter described by this configuration.
    pub fn noise_filter(&self) -> NoiseFilter {
        NoiseFilter::new(self.noise.iter().cloned(), self.min_chars)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub const fn new(width: f64, height: f64) -> Self {
        FigureSize { width, height }
    }
}

/// Pixel dimensions of the word-cloud canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        CanvasSize { width, height }
    }
}

/// Figure size for each chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureSizes {
    pub word_cloud: FigureSize,
    pub bar: FigureSize,
    pub pie: FigureSize,
    pub line: FigureSize,
    pub heatmap: FigureSize,
    pub scatter: FigureSize,
    pub horizontal_bar: FigureSize,
}

impl Default for FigureSizes {
    fn default() -> Self {
        FigureSizes {
            word_cloud: FigureSize::new(10.0, 5.0),
            bar: FigureSize::new(10.0, 5.0),
            pie: FigureSize::new(8.0, 8.0),
            line: FigureSize::new(10.0, 5.0),
            heatmap: FigureSize::new(10.0, 8.0),
            scatter: FigureSize::new(10.0, 6.0),
            horizontal_bar: FigureSize::new(10.0, 6.0),
        }
    }
}

/// Rendering settings handed to every chart builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Font family able to display CJK glyphs.
    pub font_family: String,
    /// Font size in points for titles and axis labels.
    pub font_size: f64,
    /// Render negative numbers with the Unicode minus sign instead of `-`.
    pub unicode_minus: bool,
    /// Name of the word label column.
    pub word_column: String,
    /// Name of the count column.
    pub count_column: String,
    /// Word-cloud canvas in pixels.
    pub canvas: CanvasSize,
    pub figure_sizes: FigureSizes,
}

impl ChartConfig {
    pub fn new() -> Self {
        ChartConfig {
            font_family: "Microsoft YaHei".to_string(),
            font_size: 14.0,
            unicode_minus: false,
            word_column: "词语".to_string(),
            count_column: "频率".to_string(),
            canvas: CanvasSize::new(800, 400),
            figure_sizes: FigureSizes::default(),
        }
    }

    pub fn with_font_family<S: Into<String>>(mut self, font_family: S) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_unicode_minus(mut self, unicode_minus: bool) -> Self {
        self.unicode_minus = unicode_minus;
        self
    }

    pub fn with_columns<W: Into<String>, C: Into<String>>(
        mut self,
        word_column: W,
        count_column: C,
    ) -> Self {
        self.word_column = word_column.into();
        self.count_column = count_column.into();
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas = CanvasSize::new(width, height);
        self
    }

    /// Figure size used for the given chart kind.
    pub fn figure_size(&self, kind: ChartKind) -> FigureSize {
        let sizes = &self.figure_sizes;
        match kind {
            ChartKind::WordCloud => sizes.word_cloud,
            ChartKind::Bar => sizes.bar,
            ChartKind::Pie => sizes.pie,
            ChartKind::Line => sizes.line,
            ChartKind::Heatmap => sizes.heatmap,
            ChartKind::Scatter => sizes.scatter,
            ChartKind::HorizontalBar => sizes.horizontal_bar,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.top_n, 20);
        assert_eq!(config.min_chars, 2);
        assert_eq!(config.noise.len(), DEFAULT_NOISE.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let config = AnalysisConfig::default().with_top_n(0);
        assert!(matches!(
            config.validate(),
            Err(WordFreqError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_filter_settings_rejected() {
        let looser_length = AnalysisConfig::default().with_min_chars(1);
        assert!(matches!(
            looser_length.validate(),
            Err(WordFreqError::InvalidArgument(_))
        ));

        let empty_noise = AnalysisConfig::default().with_noise(Vec::<String>::new());
        assert!(matches!(
            empty_noise.validate(),
            Err(WordFreqError::InvalidArgument(_))
        ));

        let mut edited = AnalysisConfig::default();
        edited.noise.retain(|n| n != "。");
        assert!(edited.validate().is_err());
    }

    #[test]
    fn test_stricter_filter_accepted() {
        let mut noise: Vec<String> = DEFAULT_NOISE.iter().map(|s| s.to_string()).collect();
        noise.push("我们".to_string());
        let config = AnalysisConfig::default().with_min_chars(3).with_noise(noise);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_figure_sizes_per_kind() {
        let config = ChartConfig::default();
        assert_eq!(config.figure_size(ChartKind::Pie), FigureSize::new(8.0, 8.0));
        assert_eq!(
            config.figure_size(ChartKind::Heatmap),
            FigureSize::new(10.0, 8.0)
        );
        assert_eq!(config.canvas, CanvasSize::new(800, 400));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"font_family": "SimHei", "unicode_minus": true}"#).unwrap();
        assert_eq!(config.font_family, "SimHei");
        assert!(config.unicode_minus);
        assert_eq!(config.word_column, "词语");
        assert_eq!(config.figure_sizes, FigureSizes::default());
    }
}
