//! Selection of the chart builder for a requested kind.

use serde::{Deserialize, Serialize};

use crate::chart::bar::{build_bar_chart, build_horizontal_bar_chart};
use crate::chart::heatmap::build_heatmap;
use crate::chart::kind::ChartKind;
use crate::chart::line::{build_line_chart, build_scatter_plot};
use crate::chart::pie::build_pie_chart;
use crate::chart::spec::ChartSpec;
use crate::chart::wordcloud::build_word_cloud;
use crate::config::{ChartConfig, DEFAULT_TOP_N};
use crate::error::Result;
use crate::frequency::FrequencyTable;

/// A request for one chart over the top of a ranked table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub top_n: usize,
}

impl ChartRequest {
    /// Request `kind` over the default top-20 slice.
    pub fn new(kind: ChartKind) -> Self {
        ChartRequest {
            kind,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Build the chart described by `request` from the full ranked table.
///
/// The table is cut to `top_n` entries, reshaped into the input the builder
/// expects (word list, frame, or pivoted matrix), then handed to the
/// builder for `request.kind`.
pub fn dispatch(
    request: &ChartRequest,
    table: &FrequencyTable,
    config: &ChartConfig,
) -> Result<ChartSpec> {
    let slice = table.top_n(request.top_n)?;
    log::debug!(
        "building {} over {} of {} words",
        request.kind.slug(),
        slice.len(),
        table.len()
    );

    match request.kind {
        ChartKind::WordCloud => build_word_cloud(&slice.words(), config),
        ChartKind::Bar => build_bar_chart(&slice.to_frame(config), config),
        ChartKind::Pie => build_pie_chart(&slice.to_frame(config), config),
        ChartKind::Line => build_line_chart(&slice.to_frame(config), config),
        ChartKind::Heatmap => {
            let matrix = slice.to_frame(config).pivot(&config.word_column)?;
            build_heatmap(&matrix, config)
        }
        ChartKind::Scatter => build_scatter_plot(&slice.to_frame(config), config),
        ChartKind::HorizontalBar => build_horizontal_bar_chart(&slice.to_frame(config), config),
    }
}

/// Like [`dispatch`], taking the chart kind as a user-supplied identifier.
///
/// An identifier that names no kind fails with
/// [`WordFreqError::UnsupportedChartKind`](crate::WordFreqError::UnsupportedChartKind).
pub fn dispatch_str(
    kind: &str,
    top_n: usize,
    table: &FrequencyTable,
    config: &ChartConfig,
) -> Result<ChartSpec> {
    let request = ChartRequest {
        kind: kind.parse()?,
        top_n,
    };
    dispatch(&request, table, config)
}
