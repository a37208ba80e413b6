//! Renderable chart specifications.
//!
//! A [`ChartSpec`] describes a figure completely: size, font, axes and the
//! marks to draw. Rendering it to pixels is left to the display surface.

use serde::{Deserialize, Serialize};

use crate::chart::kind::ChartKind;
use crate::config::{CanvasSize, ChartConfig, FigureSize};

/// Font used for titles and axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
}

/// Horizontal alignment of tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickAlign {
    Left,
    Center,
    Right,
}

/// One axis of a cartesian chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    /// Categories in display order when the axis is categorical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Tick label rotation in degrees.
    pub tick_rotation: f64,
    pub tick_align: TickAlign,
}

impl Axis {
    pub fn numeric<S: Into<String>>(label: S) -> Self {
        Axis {
            label: label.into(),
            categories: None,
            tick_rotation: 0.0,
            tick_align: TickAlign::Center,
        }
    }

    pub fn categorical<S: Into<String>>(label: S, categories: Vec<String>) -> Self {
        Axis {
            label: label.into(),
            categories: Some(categories),
            tick_rotation: 0.0,
            tick_align: TickAlign::Center,
        }
    }

    pub fn with_rotation(mut self, degrees: f64, align: TickAlign) -> Self {
        self.tick_rotation = degrees;
        self.tick_align = align;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x: Axis,
    pub y: Axis,
}

/// A word placed on the word-cloud canvas. Coordinates are the top-left
/// corner of its bounding box, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub text: String,
    pub font_size: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub label: String,
    pub value: f64,
    /// Share of the displayed slice total, in `0.0..=1.0`.
    pub fraction: f64,
    /// Degrees, counter-clockwise from the positive x axis.
    pub start_angle: f64,
    pub sweep_angle: f64,
    /// Formatted percentage, e.g. `"12.5%"`.
    pub percent_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub row: usize,
    pub column: usize,
    pub value: f64,
    pub color: String,
    pub annotation: String,
}

/// The marks of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartBody {
    WordCloud {
        canvas: CanvasSize,
        interpolation: String,
        words: Vec<PlacedWord>,
    },
    Bars {
        orientation: Orientation,
        palette: String,
        bars: Vec<Bar>,
    },
    Pie {
        start_angle: f64,
        equal_aspect: bool,
        wedges: Vec<Wedge>,
    },
    Line {
        color: String,
        marker: String,
        line_style: String,
        line_width: f64,
        marker_size: f64,
        points: Vec<Point>,
    },
    Heatmap {
        colormap: String,
        annotate: bool,
        colorbar: bool,
        min: f64,
        max: f64,
        row_labels: Vec<String>,
        column_labels: Vec<String>,
        cells: Vec<HeatmapCell>,
    },
    Scatter {
        color: String,
        points: Vec<Point>,
    },
}

/// A complete, renderable chart description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub description: String,
    pub figure_size: FigureSize,
    pub font: FontSpec,
    pub unicode_minus: bool,
    /// Set when the input had no rows and the chart has nothing to draw.
    pub placeholder: bool,
    /// `None` when the axes are hidden, as for word clouds and pies.
    pub axes: Option<Axes>,
    pub body: ChartBody,
}

impl ChartSpec {
    /// A spec for `kind` with title, size and font taken from `config`.
    pub fn new(kind: ChartKind, config: &ChartConfig, body: ChartBody) -> Self {
        ChartSpec {
            kind,
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            figure_size: config.figure_size(kind),
            font: FontSpec {
                family: config.font_family.clone(),
                size: config.font_size,
            },
            unicode_minus: config.unicode_minus,
            placeholder: false,
            axes: None,
            body,
        }
    }

    pub fn with_axes(mut self, x: Axis, y: Axis) -> Self {
        self.axes = Some(Axes { x, y });
        self
    }

    pub fn with_placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Number of marks (words, bars, wedges, points or cells).
    pub fn mark_count(&self) -> usize {
        match &self.body {
            ChartBody::WordCloud { words, .. } => words.len(),
            ChartBody::Bars { bars, .. } => bars.len(),
            ChartBody::Pie { wedges, .. } => wedges.len(),
            ChartBody::Line { points, .. } | ChartBody::Scatter { points, .. } => points.len(),
            ChartBody::Heatmap { cells, .. } => cells.len(),
        }
    }

    /// Serialize the spec as pretty-printed JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Format a number for display, honouring the minus-sign setting.
pub fn format_number(value: f64, unicode_minus: bool) -> String {
    let text = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    };
    if unicode_minus {
        text.replacen('-', "\u{2212}", 1)
    } else {
        text
    }
}
