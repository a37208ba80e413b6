//! Vertical and horizontal bar charts.

use crate::chart::kind::ChartKind;
use crate::chart::palette::{Colormap, muted};
use crate::chart::spec::{Axis, Bar, ChartBody, ChartSpec, Orientation, TickAlign};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::frame::DataFrame;

/// One bar per word, height = count, words along x in table order.
///
/// Fails with an invalid-argument error if the word column is missing.
pub fn build_bar_chart(frame: &DataFrame, config: &ChartConfig) -> Result<ChartSpec> {
    let words = frame.require_text(&config.word_column)?;
    let counts = frame.require_numeric(&config.count_column)?;

    let colors = Colormap::Viridis.discrete(words.len());
    let bars = make_bars(words, counts, colors);

    let x = Axis::categorical(&config.word_column, words.to_vec())
        .with_rotation(45.0, TickAlign::Right);
    let y = Axis::numeric(&config.count_column);

    Ok(finish(ChartKind::Bar, Orientation::Vertical, "viridis", bars, config).with_axes(x, y))
}

/// One bar per word, length = count, words down the y axis in table order.
///
/// Fails with an invalid-argument error if the word column is missing.
pub fn build_horizontal_bar_chart(frame: &DataFrame, config: &ChartConfig) -> Result<ChartSpec> {
    let words = frame.require_text(&config.word_column)?;
    let counts = frame.require_numeric(&config.count_column)?;

    let bars = make_bars(words, counts, muted(words.len()));

    let x = Axis::numeric(&config.count_column);
    let y = Axis::categorical(&config.word_column, words.to_vec());

    Ok(finish(ChartKind::HorizontalBar, Orientation::Horizontal, "muted", bars, config)
        .with_axes(x, y))
}

fn make_bars(words: &[String], counts: &[f64], colors: Vec<String>) -> Vec<Bar> {
    words
        .iter()
        .zip(counts)
        .zip(colors)
        .map(|((word, &value), color)| Bar {
            label: word.clone(),
            value,
            color,
        })
        .collect()
}

fn finish(
    kind: ChartKind,
    orientation: Orientation,
    palette: &str,
    bars: Vec<Bar>,
    config: &ChartConfig,
) -> ChartSpec {
    let placeholder = bars.is_empty();
    if placeholder {
        log::warn!("{kind} requested for an empty table");
    }
    let body = ChartBody::Bars {
        orientation,
        palette: palette.to_string(),
        bars,
    };
    ChartSpec::new(kind, config, body).with_placeholder(placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordFreqError;
    use crate::frame::Column;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Column::text("词语", vec!["老鼠".into(), "喜欢".into(), "奶酪".into()]),
            Column::numeric("频率", vec![3.0, 2.0, 1.0]),
        ])
    }

    #[test]
    fn test_vertical_bars_keep_rank_order() {
        let spec = build_bar_chart(&frame(), &ChartConfig::default()).unwrap();
        let ChartBody::Bars {
            orientation, bars, ..
        } = &spec.body
        else {
            panic!("expected bars");
        };
        assert_eq!(*orientation, Orientation::Vertical);
        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["老鼠", "喜欢", "奶酪"]);
        assert_eq!(bars[0].value, 3.0);

        let axes = spec.axes.unwrap();
        assert_eq!(axes.x.label, "词语");
        assert_eq!(axes.x.tick_rotation, 45.0);
        assert_eq!(axes.x.tick_align, TickAlign::Right);
        assert_eq!(axes.y.label, "频率");
        assert_eq!(spec.title, "词频柱状图");
    }

    #[test]
    fn test_horizontal_bars_flip_axes() {
        let spec = build_horizontal_bar_chart(&frame(), &ChartConfig::default()).unwrap();
        let axes = spec.axes.clone().unwrap();
        assert_eq!(axes.x.label, "频率");
        assert_eq!(axes.y.label, "词语");
        assert_eq!(
            axes.y.categories.unwrap(),
            vec!["老鼠".to_string(), "喜欢".into(), "奶酪".into()]
        );
        assert!(matches!(
            spec.body,
            ChartBody::Bars {
                orientation: Orientation::Horizontal,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_word_column() {
        let frame = frame().without_column("词语");
        let config = ChartConfig::default();
        assert!(matches!(
            build_bar_chart(&frame, &config),
            Err(WordFreqError::InvalidArgument(_))
        ));
        assert!(matches!(
            build_horizontal_bar_chart(&frame, &config),
            Err(WordFreqError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_frame_is_placeholder() {
        let empty = DataFrame::new(vec![
            Column::text("词语", vec![]),
            Column::numeric("频率", vec![]),
        ]);
        let spec = build_bar_chart(&empty, &ChartConfig::default()).unwrap();
        assert!(spec.placeholder);
        assert_eq!(spec.mark_count(), 0);
    }
}
