use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::series::{DEFAULT_SERIES_COLOR, SeriesRender, ensure_finite};
use crate::core::stats::{Bins, histogram};
use crate::core::{Domain, ScaleSet, YAxis};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Primitive, RectPrimitive, ShapeStyle, tooltip};

/// Share of the bin pitch covered by each bar; the rest is the gap.
pub const HISTOGRAM_BAR_SHRINK: f64 = 0.9;

/// Deterministic bar geometry for one histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBar {
    pub x_center: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl HistogramBar {
    #[must_use]
    pub fn height(self) -> f64 {
        self.y_bottom - self.y_top
    }
}

/// Equal-width bins drawn as bars from zero up to each count.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    bins: Bins,
    color: Color,
    label: Option<String>,
}

impl HistogramSeries {
    /// Bins `data` into `bins` equal-width buckets spanning its range.
    pub fn new(data: &[f64], bins: usize) -> ChartResult<Self> {
        Ok(Self::from_validated(histogram(data, bins)?))
    }

    /// Uses precomputed bins. `edges` must be strictly increasing and one
    /// longer than `counts`.
    pub fn from_bins(edges: Vec<f64>, counts: Vec<usize>) -> ChartResult<Self> {
        if counts.is_empty() {
            return Err(ChartError::EmptyInput { field: "counts" });
        }
        if edges.len() != counts.len() + 1 {
            return Err(ChartError::ShapeMismatch {
                field: "edges",
                expected: counts.len() + 1,
                actual: edges.len(),
            });
        }
        ensure_finite(&edges, "edges")?;
        if edges.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(ChartError::InvalidData(
                "`edges` must be strictly increasing".to_owned(),
            ));
        }
        Ok(Self::from_validated(Bins { edges, counts }))
    }

    fn from_validated(bins: Bins) -> Self {
        Self {
            bins,
            color: DEFAULT_SERIES_COLOR,
            label: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn bins(&self) -> &Bins {
        &self.bins
    }

    /// One bar per bin, centered on the bin midpoint.
    #[must_use]
    pub fn project(&self, scales: &ScaleSet, axis: YAxis) -> Vec<HistogramBar> {
        let (x_scale, y_scale) = (scales.x(), scales.y_for(axis));
        let edges = &self.bins.edges;
        let width = x_scale.pixel_distance(edges[0], edges[1]) * HISTOGRAM_BAR_SHRINK;
        let half_width = width * 0.5;
        let baseline = y_scale.map(0.0);

        self.bins
            .centers()
            .into_iter()
            .zip(&self.bins.counts)
            .map(|(center, count)| {
                let x_center = x_scale.map(center);
                let y_value = y_scale.map(*count as f64);
                HistogramBar {
                    x_center,
                    x_left: x_center - half_width,
                    x_right: x_center + half_width,
                    y_top: y_value.min(baseline),
                    y_bottom: y_value.max(baseline),
                }
            })
            .collect()
    }
}

impl SeriesRender for HistogramSeries {
    fn x_extent(&self) -> Option<Domain> {
        Domain::from_values(self.bins.edges.iter().copied())
    }

    fn y_extent(&self) -> Option<Domain> {
        let counts = self.bins.counts.iter().map(|count| *count as f64);
        Domain::from_values(counts).map(|domain| domain.include(0.0))
    }

    fn render(&self, scales: &ScaleSet, axis: YAxis) -> Vec<Primitive> {
        let style = ShapeStyle::filled(self.color).with_stroke(Color::BLACK, 1.0);
        let label = self.label.as_deref().unwrap_or_default();
        let centers = self.bins.centers();

        let out: Vec<Primitive> = self
            .project(scales, axis)
            .into_iter()
            .zip(centers.iter().zip(&self.bins.counts))
            .map(|(bar, (center, count))| {
                let width = bar.x_right - bar.x_left;
                RectPrimitive::new(bar.x_left, bar.y_top, width, bar.height(), style)
                    .with_tooltip(tooltip([
                        ("x", center.to_string()),
                        ("y", count.to_string()),
                        ("label", label.to_owned()),
                    ]))
                    .into()
            })
            .collect();

        trace!(bins = out.len(), "render histogram series");
        out
    }
}
