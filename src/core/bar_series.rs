use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::series::{
    DEFAULT_SERIES_COLOR, SeriesRender, ensure_positive, point_extents, series_title, zip_points,
};
use crate::core::{DataPoint, Domain, ScaleSet, YAxis};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Primitive, RectPrimitive, ShapeStyle, tooltip};

pub const DEFAULT_BAR_WIDTH_FRACTION: f64 = 0.8;
const BAR_OUTLINE_PX: f64 = 1.0;

/// Deterministic geometry of one bar in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x_center: f64,
    pub x_left: f64,
    pub width: f64,
    pub top: f64,
    pub height: f64,
}

/// One bar per `(x, y)` pair, grown from `min(0, y_domain_min)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    points: Vec<DataPoint>,
    color: Color,
    label: Option<String>,
    title: Option<String>,
    bar_width_fraction: f64,
}

impl BarSeries {
    pub fn new(x: &[f64], y: &[f64]) -> ChartResult<Self> {
        Ok(Self {
            points: zip_points(x, y)?,
            color: DEFAULT_SERIES_COLOR,
            label: None,
            title: None,
            bar_width_fraction: DEFAULT_BAR_WIDTH_FRACTION,
        })
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

    /// Heading centered above the plot area. An empty title emits nothing.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Share of each category slot covered by its bar, in `(0, 1]`.
    pub fn with_bar_width_fraction(mut self, fraction: f64) -> ChartResult<Self> {
        let fraction = ensure_positive(fraction, "bar_width_fraction")?;
        if fraction > 1.0 {
            return Err(ChartError::InvalidData(
                "`bar_width_fraction` must be <= 1".to_owned(),
            ));
        }
        self.bar_width_fraction = fraction;
        Ok(self)
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Bar rectangles in input order; empty for an empty series.
    #[must_use]
    pub fn project(&self, scales: &ScaleSet, axis: YAxis) -> Vec<BarGeometry> {
        let count = self.points.len();
        if count == 0 {
            return Vec::new();
        }

        let x_scale = scales.x();
        let y_scale = scales.y_for(axis);
        // one slot is `domain / count`, which maps to `range / count` pixels
        let width = x_scale.range().span().abs() / count as f64 * self.bar_width_fraction;

        let baseline = y_scale.map(y_scale.domain().min().min(0.0));
        self.points
            .iter()
            .map(|point| {
                let x_center = x_scale.map(point.x);
                let y_value = y_scale.map(point.y);
                BarGeometry {
                    x_center,
                    x_left: x_center - width / 2.0,
                    width,
                    top: y_value.min(baseline),
                    height: (y_value - baseline).abs(),
                }
            })
            .collect()
    }
}

impl SeriesRender for BarSeries {
    fn x_extent(&self) -> Option<Domain> {
        point_extents(&self.points).0
    }

    fn y_extent(&self) -> Option<Domain> {
        point_extents(&self.points).1
    }

    fn render(&self, scales: &ScaleSet, axis: YAxis) -> Vec<Primitive> {
        let style = ShapeStyle::filled(self.color).with_stroke(Color::BLACK, BAR_OUTLINE_PX);
        let label = self.label.as_deref().unwrap_or_default();
        let mut out: Vec<Primitive> = self
            .project(scales, axis)
            .into_iter()
            .zip(&self.points)
            .map(|(bar, point)| {
                RectPrimitive::new(bar.x_left, bar.top, bar.width, bar.height, style)
                    .with_tooltip(tooltip([
                        ("x", point.x.to_string()),
                        ("y", point.y.to_string()),
                        ("label", label.to_owned()),
                    ]))
                    .into()
            })
            .collect();
        let bars = out.len();
        out.extend(series_title(self.title.as_deref(), scales));

        trace!(bars, "render bar series");
        out
    }
}
