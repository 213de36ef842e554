#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::series::SeriesRender;
use crate::core::{Domain, ScaleSet, YAxis};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Primitive, RectPrimitive, ShapeStyle, tooltip};

/// Five grey steps from white to near black.
pub const DEFAULT_HEATMAP_COLORMAP: [Color; 5] = [
    Color::from_rgb8(0xff, 0xff, 0xff),
    Color::from_rgb8(0xcc, 0xcc, 0xcc),
    Color::from_rgb8(0x99, 0x99, 0x99),
    Color::from_rgb8(0x66, 0x66, 0x66),
    Color::from_rgb8(0x33, 0x33, 0x33),
];

/// Colormap bucket for `value` among `buckets` steps spanning `[vmin, vmax]`.
///
/// Out-of-range values clamp to the end buckets. A degenerate range maps
/// everything to bucket 0.
#[must_use]
pub fn bucket_index(value: f64, vmin: f64, vmax: f64, buckets: usize) -> usize {
    let last = buckets.saturating_sub(1);
    // halved operands keep the range finite for any finite bounds
    let half_span = vmax / 2.0 - vmin / 2.0;
    if last == 0 || !half_span.is_finite() || half_span <= 0.0 {
        return 0;
    }
    let scaled = ((value / 2.0 - vmin / 2.0) / half_span * last as f64).floor();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else {
        (scaled as usize).min(last)
    }
}

/// Deterministic geometry of one heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub bucket: usize,
}

/// Row-major matrix drawn as a grid of quantized color cells over the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapSeries {
    matrix: Vec<Vec<f64>>,
    columns: usize,
    colormap: Vec<Color>,
}

impl HeatmapSeries {
    pub fn new(matrix: Vec<Vec<f64>>) -> ChartResult<Self> {
        let columns = matrix.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(ChartError::EmptyInput { field: "matrix" });
        }
        if let Some(row) = matrix.iter().find(|row| row.len() != columns) {
            return Err(ChartError::ShapeMismatch {
                field: "matrix",
                expected: columns,
                actual: row.len(),
            });
        }
        if matrix.iter().flatten().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "`matrix` must contain only finite values".to_owned(),
            ));
        }
        Ok(Self {
            matrix,
            columns,
            colormap: DEFAULT_HEATMAP_COLORMAP.to_vec(),
        })
    }

    /// Colors from lowest to highest bucket.
    pub fn with_colormap(mut self, colormap: Vec<Color>) -> ChartResult<Self> {
        if colormap.is_empty() {
            return Err(ChartError::EmptyInput { field: "colormap" });
        }
        self.colormap = colormap;
        Ok(self)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.matrix.len()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn colormap(&self) -> &[Color] {
        &self.colormap
    }

    /// `(vmin, vmax)` over every cell.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        self.matrix
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            })
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn project(&self, scales: &ScaleSet) -> Vec<HeatmapCell> {
        let plot = scales.plot_area();
        let cell_width = plot.width() / self.columns as f64;
        let cell_height = plot.height() / self.rows() as f64;
        let (vmin, vmax) = self.value_range();
        if vmin == vmax {
            debug!(value = vmin, "constant heatmap, using a single bucket");
        }
        let buckets = self.colormap.len();

        let project_row = |(row, values): (usize, &Vec<f64>)| -> Vec<HeatmapCell> {
            values
                .iter()
                .enumerate()
                .map(|(col, value)| HeatmapCell {
                    row,
                    col,
                    x: plot.left + col as f64 * cell_width,
                    y: plot.top + row as f64 * cell_height,
                    width: cell_width,
                    height: cell_height,
                    bucket: bucket_index(*value, vmin, vmax, buckets),
                })
                .collect()
        };

        #[cfg(feature = "parallel-projection")]
        {
            let rows: Vec<Vec<HeatmapCell>> =
                self.matrix.par_iter().enumerate().map(project_row).collect();
            rows.into_iter().flatten().collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            self.matrix.iter().enumerate().flat_map(project_row).collect()
        }
    }
}

impl SeriesRender for HeatmapSeries {
    fn x_extent(&self) -> Option<Domain> {
        None
    }

    fn y_extent(&self) -> Option<Domain> {
        None
    }

    fn render(&self, scales: &ScaleSet, _axis: YAxis) -> Vec<Primitive> {
        let out: Vec<Primitive> = self
            .project(scales)
            .into_iter()
            .map(|cell| {
                let value = self.matrix[cell.row][cell.col];
                RectPrimitive::new(
                    cell.x,
                    cell.y,
                    cell.width,
                    cell.height,
                    ShapeStyle::filled(self.colormap[cell.bucket]),
                )
                .with_tooltip(tooltip([
                    ("row", cell.row.to_string()),
                    ("col", cell.col.to_string()),
                    ("value", value.to_string()),
                ]))
                .into()
            })
            .collect();

        trace!(rows = self.rows(), columns = self.columns, "render heatmap series");
        out
    }
}
