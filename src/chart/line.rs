//! Line and scatter charts over (word, count) points.

use crate::chart::kind::ChartKind;
use crate::chart::spec::{Axis, ChartBody, ChartSpec, Point, TickAlign};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::frame::DataFrame;

/// Connect (word, count) points in table order with circle markers.
pub fn build_line_chart(frame: &DataFrame, config: &ChartConfig) -> Result<ChartSpec> {
    let (points, x, y) = points_and_axes(frame, config)?;
    let placeholder = points.is_empty();

    let body = ChartBody::Line {
        color: "b".to_string(),
        marker: "o".to_string(),
        line_style: "-".to_string(),
        line_width: 2.0,
        marker_size: 8.0,
        points,
    };

    Ok(ChartSpec::new(ChartKind::Line, config, body)
        .with_axes(x, y)
        .with_placeholder(placeholder))
}

/// Plot (word, count) as unconnected points in table order.
pub fn build_scatter_plot(frame: &DataFrame, config: &ChartConfig) -> Result<ChartSpec> {
    let (points, x, y) = points_and_axes(frame, config)?;
    let placeholder = points.is_empty();

    let body = ChartBody::Scatter {
        color: "r".to_string(),
        points,
    };

    Ok(ChartSpec::new(ChartKind::Scatter, config, body)
        .with_axes(x, y)
        .with_placeholder(placeholder))
}

fn points_and_axes(frame: &DataFrame, config: &ChartConfig) -> Result<(Vec<Point>, Axis, Axis)> {
    let words = frame.require_text(&config.word_column)?;
    let counts = frame.require_numeric(&config.count_column)?;

    if words.is_empty() {
        log::warn!("point chart requested for an empty table");
    }

    let points = words
        .iter()
        .zip(counts)
        .map(|(word, &value)| Point {
            label: word.clone(),
            value,
        })
        .collect();

    let x = Axis::categorical(&config.word_column, words.to_vec())
        .with_rotation(45.0, TickAlign::Center);
    let y = Axis::numeric(&config.count_column);

    Ok((points, x, y))
}
