use tracing::trace;

use crate::core::series::{
    DEFAULT_SERIES_COLOR, SeriesRender, ensure_finite_points, ensure_positive, point_extents,
    series_title, zip_points,
};
use crate::core::{DataPoint, Domain, ScaleSet, YAxis};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LineDash, PolylinePrimitive, Primitive, ShapeStyle, tooltip,
};

pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const LINE_MARKER_RADIUS: f64 = 4.0;

/// Points connected in input order. Callers sort beforehand when they want a
/// monotonic trace.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    points: Vec<DataPoint>,
    color: Color,
    label: Option<String>,
    title: Option<String>,
    dash: LineDash,
    width: f64,
}

impl LineSeries {
    pub fn new(x: &[f64], y: &[f64]) -> ChartResult<Self> {
        Ok(Self::from_validated(zip_points(x, y)?))
    }

    pub fn from_points(points: Vec<DataPoint>) -> ChartResult<Self> {
        ensure_finite_points(&points)?;
        Ok(Self::from_validated(points))
    }

    fn from_validated(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            color: DEFAULT_SERIES_COLOR,
            label: None,
            title: None,
            dash: LineDash::Solid,
            width: DEFAULT_LINE_WIDTH,
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

    /// Heading centered above the plot area. An empty title emits nothing.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }

    pub fn with_width(mut self, width: f64) -> ChartResult<Self> {
        self.width = ensure_positive(width, "width")?;
        Ok(self)
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Pixel positions of every point, in input order.
    #[must_use]
    pub fn project(&self, scales: &ScaleSet, axis: YAxis) -> Vec<(f64, f64)> {
        let (x_scale, y_scale) = (scales.x(), scales.y_for(axis));
        self.points
            .iter()
            .map(|p| (x_scale.map(p.x), y_scale.map(p.y)))
            .collect()
    }
}

impl SeriesRender for LineSeries {
    fn x_extent(&self) -> Option<Domain> {
        point_extents(&self.points).0
    }

    fn y_extent(&self) -> Option<Domain> {
        point_extents(&self.points).1
    }

    fn render(&self, scales: &ScaleSet, axis: YAxis) -> Vec<Primitive> {
        let projected = self.project(scales, axis);
        let mut out = Vec::with_capacity(projected.len() + 2);
        if !projected.is_empty() {
            out.push(
                PolylinePrimitive {
                    points: projected.clone(),
                    stroke_width: self.width,
                    color: self.color,
                    dash: self.dash,
                }
                .into(),
            );
        }

        let label = self.label.as_deref().unwrap_or_default();
        for (point, (px, py)) in self.points.iter().zip(projected) {
            out.push(
                CirclePrimitive::new(px, py, LINE_MARKER_RADIUS, ShapeStyle::filled(self.color))
                    .with_tooltip(tooltip([
                        ("x", point.x.to_string()),
                        ("y", point.y.to_string()),
                        ("label", label.to_owned()),
                    ]))
                    .into(),
            );
        }
        out.extend(series_title(self.title.as_deref(), scales));

        trace!(points = self.points.len(), primitives = out.len(), "render line series");
        out
    }
}
