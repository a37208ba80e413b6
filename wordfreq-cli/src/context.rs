use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wordfreq::analysis::{LinderaTokenizer, Tokenizer, WhitespaceTokenizer};
use wordfreq::{AnalysisConfig, Analyzer, ChartConfig};

use crate::cli::TokenizerKind;

/// Contents of the configuration file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub analysis: AnalysisConfig,
    pub chart: ChartConfig,
}

/// Load settings from a TOML file, or the defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let settings: Settings = toml::from_str(&content).context("Failed to parse config TOML")?;
    settings.analysis.validate()?;
    Ok(settings)
}

/// Read the article text from a file or stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}

/// Build the analyzer for the chosen tokenizer.
pub fn build_analyzer(kind: TokenizerKind, config: AnalysisConfig) -> Result<Analyzer> {
    let tokenizer: Arc<dyn Tokenizer> = match kind {
        TokenizerKind::Lindera => {
            Arc::new(LinderaTokenizer::new().context("Failed to load the segmentation dictionary")?)
        }
        TokenizerKind::Whitespace => Arc::new(WhitespaceTokenizer::new()),
    };
    Ok(Analyzer::new(tokenizer, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        assert_eq!(load_settings(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[analysis]\ntop_n = 5\n\n[chart]\nfont_family = \"SimHei\"\n\n[chart.canvas]\nwidth = 400\nheight = 200"
        )
        .unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.analysis.top_n, 5);
        assert_eq!(settings.analysis.min_chars, 2);
        assert_eq!(settings.chart.font_family, "SimHei");
        assert_eq!(settings.chart.canvas.width, 400);
        assert_eq!(settings.chart.word_column, "词语");
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\ntop_n = 0").unwrap();
        assert!(load_settings(Some(file.path())).is_err());
    }

    #[test]
    fn test_settings_roundtrip_through_toml() {
        let text = toml::to_string_pretty(&Settings::default()).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
