//! Chart specifications built from ranked frequency tables.
//!
//! # Module Structure
//!
//! - `kind`: the seven chart kinds and their identifiers
//! - `spec`: the renderable [`ChartSpec`] handed to a display surface
//! - `wordcloud`, `bar`, `pie`, `line`, `heatmap`: one pure builder per kind
//! - `dispatch`: picks the builder for a [`ChartRequest`]
//! - `palette`: colours shared by the builders

pub mod bar;
pub mod dispatch;
pub mod heatmap;
pub mod kind;
pub mod line;
pub mod palette;
pub mod pie;
pub mod spec;
pub mod wordcloud;

// Re-exports
pub use bar::{build_bar_chart, build_horizontal_bar_chart};
pub use dispatch::{ChartRequest, dispatch, dispatch_str};
pub use heatmap::build_heatmap;
pub use kind::ChartKind;
pub use line::{build_line_chart, build_scatter_plot};
pub use pie::build_pie_chart;
pub use spec::{ChartBody, ChartSpec};
pub use wordcloud::build_word_cloud;
