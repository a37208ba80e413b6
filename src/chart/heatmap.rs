//! Annotated heatmap over a pivoted frequency table.
//!
//! The builder takes a [`Matrix`] whose column headers are words; pivot the
//! ranked frame with [`DataFrame::pivot`](crate::frame::DataFrame::pivot)
//! before calling it.

use crate::chart::kind::ChartKind;
use crate::chart::palette::Colormap;
use crate::chart::spec::{Axis, ChartBody, ChartSpec, HeatmapCell, format_number};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::frame::Matrix;

/// Colour-intensity grid with a numeric annotation in every cell.
pub fn build_heatmap(matrix: &Matrix, config: &ChartConfig) -> Result<ChartSpec> {
    let colormap = Colormap::Coolwarm;
    let (min, max) = matrix.range().unwrap_or((0.0, 0.0));
    let span = max - min;

    let mut cells = Vec::with_capacity(matrix.num_rows() * matrix.num_columns());
    for (row, values) in matrix.values.iter().enumerate() {
        for (column, &value) in values.iter().enumerate() {
            let t = if span > 0.0 { (value - min) / span } else { 0.5 };
            cells.push(HeatmapCell {
                row,
                column,
                value,
                color: colormap.sample(t),
                annotation: format_number(value, config.unicode_minus),
            });
        }
    }

    let placeholder = cells.is_empty();
    if placeholder {
        log::warn!("heatmap requested for an empty matrix");
    }

    let x = Axis::categorical(&config.word_column, matrix.column_labels.clone());
    let y = Axis::categorical(&config.count_column, matrix.row_labels.clone());

    let body = ChartBody::Heatmap {
        colormap: colormap.name().to_string(),
        annotate: true,
        colorbar: true,
        min,
        max,
        row_labels: matrix.row_labels.clone(),
        column_labels: matrix.column_labels.clone(),
        cells,
    };

    Ok(ChartSpec::new(ChartKind::Heatmap, config, body)
        .with_axes(x, y)
        .with_placeholder(placeholder))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Matrix {
        Matrix {
            row_labels: vec!["频率".into()],
            column_labels: vec!["老鼠".into(), "喜欢".into(), "奶酪".into()],
            values: vec![vec![3.0, 2.0, 1.0]],
        }
    }

    #[test]
    fn test_cells_annotated_and_coloured() {
        let spec = build_heatmap(&matrix(), &ChartConfig::default()).unwrap();
        let ChartBody::Heatmap {
            cells,
            min,
            max,
            column_labels,
            ..
        } = &spec.body
        else {
            panic!("expected heatmap");
        };
        assert_eq!(column_labels, &vec!["老鼠", "喜欢", "奶酪"]);
        assert_eq!((*min, *max), (1.0, 3.0));
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].annotation, "3");
        assert_eq!(cells[0].color, "#b40426");
        assert_eq!(cells[2].color, "#3b4cc0");
        assert_eq!(cells[1].column, 1);
        assert_eq!(spec.title, "热力图");

        let axes = spec.axes.clone().unwrap();
        assert_eq!(axes.x.label, "词语");
        assert_eq!(axes.y.label, "频率");
        assert_eq!(axes.y.categories, Some(vec!["频率".to_string()]));
    }

    #[test]
    fn test_uniform_values_use_midpoint() {
        let matrix = Matrix {
            row_labels: vec!["频率".into()],
            column_labels: vec!["老鼠".into(), "喜欢".into()],
            values: vec![vec![2.0, 2.0]],
        };
        let spec = build_heatmap(&matrix, &ChartConfig::default()).unwrap();
        let ChartBody::Heatmap { cells, .. } = &spec.body else {
            panic!("expected heatmap");
        };
        assert!(cells.iter().all(|c| c.color == "#dddddd"));
    }

    #[test]
    fn test_empty_matrix_is_placeholder() {
        let spec = build_heatmap(&Matrix::default(), &ChartConfig::default()).unwrap();
        assert!(spec.placeholder);
        assert_eq!(spec.mark_count(), 0);
    }
}
