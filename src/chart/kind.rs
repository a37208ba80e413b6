//! The closed set of chart kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WordFreqError;

/// One of the seven supported visualizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    WordCloud,
    Bar,
    Pie,
    Line,
    Heatmap,
    Scatter,
    HorizontalBar,
}

impl ChartKind {
    /// All kinds in menu order.
    pub const ALL: [ChartKind; 7] = [
        ChartKind::WordCloud,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Line,
        ChartKind::Heatmap,
        ChartKind::Scatter,
        ChartKind::HorizontalBar,
    ];

    /// Chinese identifier shown in the chart menu.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "词云图",
            ChartKind::Bar => "柱状图",
            ChartKind::Pie => "饼图",
            ChartKind::Line => "折线图",
            ChartKind::Heatmap => "热力图",
            ChartKind::Scatter => "散点图",
            ChartKind::HorizontalBar => "条形图",
        }
    }

    /// ASCII identifier accepted on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "wordcloud",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Scatter => "scatter",
            ChartKind::HorizontalBar => "hbar",
        }
    }

    /// Chart title.
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "词云图",
            ChartKind::Bar => "词频柱状图",
            ChartKind::Pie => "词频饼图",
            ChartKind::Line => "词频折线图",
            ChartKind::Heatmap => "热力图",
            ChartKind::Scatter => "词频散点图",
            ChartKind::HorizontalBar => "词频条形图",
        }
    }

    /// Short explanation displayed next to the chart.
    pub fn description(self) -> &'static str {
        match self {
            ChartKind::WordCloud => {
                "词云图（Word Cloud）是一种图形化的文本数据可视化技术，它通过将文本中出现频率较高的词汇以不同大小和颜色显示出来，从而直观地展示文本数据中的关键信息和模式。"
            }
            ChartKind::Bar => {
                "柱状图（Bar Chart）是一种常用的数据可视化图表，它通过水平或垂直的条形来展示数据的比较和分布情况。"
            }
            ChartKind::Pie => {
                "饼图（Pie Chart）是一种圆形的统计图表，通过将圆形分割成扇形来展示数值比例。每个扇形的角度和面积表示该部分在整体中所占的比例。"
            }
            ChartKind::Line => "折线图（Line Chart）是一种以折线连接数据点来展示数据变化趋势的图表。",
            ChartKind::Heatmap => {
                "热力图（Heatmap）是一种数据可视化工具，它通过颜色的变化来表示数据值的大小或频率。"
            }
            ChartKind::Scatter => {
                "散点图（Scatter Plot）是一种用于展示两个变量之间关系的图表，通过在坐标平面上绘制点来表示数据的分布情况。"
            }
            ChartKind::HorizontalBar => {
                "条形图（Bar Chart）是一种常用的数据可视化图表，它通过条形的长度来表示数据的大小。"
            }
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartKind {
    type Err = WordFreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s || kind.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| WordFreqError::unsupported_chart_kind(s))
    }
}
