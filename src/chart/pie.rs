//! Pie chart of the displayed slice.

use crate::chart::kind::ChartKind;
use crate::chart::spec::{ChartBody, ChartSpec, Wedge};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::frame::DataFrame;

const START_ANGLE: f64 = 90.0;

/// One wedge per word, angle proportional to the word's share of the slice.
///
/// Percentages are relative to the rows passed in, not to the whole text.
/// Fails with an invalid-argument error if the word column is missing.
pub fn build_pie_chart(frame: &DataFrame, config: &ChartConfig) -> Result<ChartSpec> {
    let words = frame.require_text(&config.word_column)?;
    let counts = frame.require_numeric(&config.count_column)?;

    let total: f64 = counts.iter().sum();
    let mut wedges = Vec::with_capacity(words.len());
    if total > 0.0 {
        let mut angle = START_ANGLE;
        for (word, &value) in words.iter().zip(counts) {
            let fraction = value / total;
            let sweep = fraction * 360.0;
            wedges.push(Wedge {
                label: word.clone(),
                value,
                fraction,
                start_angle: angle,
                sweep_angle: sweep,
                percent_label: format!("{:.1}%", fraction * 100.0),
            });
            angle += sweep;
        }
    } else {
        log::warn!("pie chart requested for a table with no counts");
    }

    let placeholder = wedges.is_empty();
    let body = ChartBody::Pie {
        start_angle: START_ANGLE,
        equal_aspect: true,
        wedges,
    };

    Ok(ChartSpec::new(ChartKind::Pie, config, body).with_placeholder(placeholder))
}
