use std::sync::Arc;

use wordfreq::analysis::token_filter::DEFAULT_NOISE;
use wordfreq::analysis::{LinderaTokenizer, Tokenizer, WhitespaceTokenizer};
use wordfreq::{AnalysisConfig, Analyzer, FrequencyEntry, FrequencyTable, WordFreqError};

/// The cat-and-mouse sentence, pre-segmented into the tokens a dictionary
/// segmenter produces for it.
const SEGMENTED: &str = "猫 和 老鼠 。 猫 喜欢 追 老鼠 ， 老鼠 喜欢 奶酪 。";

fn whitespace_analyzer() -> Analyzer {
    Analyzer::new(Arc::new(WhitespaceTokenizer::new()), AnalysisConfig::default()).unwrap()
}

#[test]
fn test_cat_and_mouse_example() -> wordfreq::Result<()> {
    let analysis = whitespace_analyzer().analyze(SEGMENTED)?;

    assert_eq!(
        analysis.full.entries(),
        &[
            FrequencyEntry::new("老鼠", 3),
            FrequencyEntry::new("喜欢", 2),
            FrequencyEntry::new("奶酪", 1),
        ]
    );
    assert_eq!(analysis.tokens_seen, 13);
    assert_eq!(analysis.tokens_kept, 6);
    assert_eq!(analysis.top, analysis.full);
    Ok(())
}

#[test]
fn test_ties_follow_first_occurrence() -> wordfreq::Result<()> {
    let analysis = whitespace_analyzer().analyze("喜欢 老鼠 奶酪 老鼠 喜欢 猫咪")?;
    let words: Vec<_> = analysis.full.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["喜欢", "老鼠", "奶酪", "猫咪"]);
    Ok(())
}

#[test]
fn test_top_n_matches_sort_then_slice() -> wordfreq::Result<()> {
    let text = (0..40)
        .map(|i| format!("词{} ", i % 13).repeat(i % 5 + 1))
        .collect::<String>();
    let analyzer = Analyzer::new(
        Arc::new(WhitespaceTokenizer::new()),
        AnalysisConfig::default().with_top_n(7),
    )?;
    let analysis = analyzer.analyze(&text)?;

    let manual = FrequencyTable::rank(analysis.full.iter().cloned()).top_n(7)?;
    assert_eq!(analysis.top, manual);
    assert_eq!(analysis.top.len(), 7.min(analysis.full.len()));
    assert_eq!(analysis.top.entries(), &analysis.full.entries()[..analysis.top.len()]);
    Ok(())
}

#[test]
fn test_top_n_zero_is_rejected() {
    let table = FrequencyTable::rank([FrequencyEntry::new("老鼠", 1)]);
    assert!(matches!(table.top_n(0), Err(WordFreqError::InvalidArgument(_))));
}

#[test]
fn test_empty_text() -> wordfreq::Result<()> {
    let analysis = whitespace_analyzer().analyze("")?;
    assert!(analysis.full.is_empty());
    assert!(analysis.top.is_empty());
    Ok(())
}

#[test]
fn test_lindera_segmentation_properties() -> wordfreq::Result<()> {
    let tokenizer = Arc::new(LinderaTokenizer::new()?);
    assert_eq!(tokenizer.tokenize("")?.count(), 0);

    let text = "猫和老鼠。猫喜欢追老鼠，老鼠喜欢奶酪。\n数据分析……数据可视化！";
    let tokens_seen = tokenizer.tokenize(text)?.count();
    assert!(tokens_seen > 0);

    let analyzer = Analyzer::new(tokenizer, AnalysisConfig::default())?;
    let analysis = analyzer.analyze(text)?;

    assert_eq!(analysis.tokens_seen, tokens_seen);
    assert!(analysis.full.total_count() as usize <= analysis.tokens_seen);
    assert_eq!(analysis.full.total_count() as usize, analysis.tokens_kept);

    for entry in &analysis.full {
        let trimmed = entry.word.trim();
        assert!(trimmed.chars().count() >= 2, "kept short token {trimmed:?}");
        assert!(!DEFAULT_NOISE.contains(&trimmed), "kept noise {trimmed:?}");
    }
    for pair in analysis.full.entries().windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }

    // Same text, same table.
    assert_eq!(analyzer.analyze(text)?, analysis);
    Ok(())
}
