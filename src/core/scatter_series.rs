use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::series::{
    DEFAULT_SERIES_COLOR, SeriesRender, ensure_positive, point_extents, series_title, zip_points,
};
use crate::core::{DataPoint, Domain, ScaleSet, YAxis};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, Color, Primitive, RectPrimitive, ShapeStyle, tooltip};

pub const DEFAULT_MARKER_SIZE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
}

impl MarkerShape {
    /// Parses a marker name. Unknown names fall back to `Circle`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("square") {
            Self::Square
        } else {
            Self::Circle
        }
    }
}

/// Unconnected markers of fixed size. `size` is the circle radius or the
/// square side length.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    points: Vec<DataPoint>,
    color: Color,
    label: Option<String>,
    title: Option<String>,
    marker: MarkerShape,
    size: f64,
}

impl ScatterSeries {
    pub fn new(x: &[f64], y: &[f64]) -> ChartResult<Self> {
        Ok(Self {
            points: zip_points(x, y)?,
            color: DEFAULT_SERIES_COLOR,
            label: None,
            title: None,
            marker: MarkerShape::Circle,
            size: DEFAULT_MARKER_SIZE,
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

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerShape) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_size(mut self, size: f64) -> ChartResult<Self> {
        self.size = ensure_positive(size, "size")?;
        Ok(self)
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }
}

impl SeriesRender for ScatterSeries {
    fn x_extent(&self) -> Option<Domain> {
        point_extents(&self.points).0
    }

    fn y_extent(&self) -> Option<Domain> {
        point_extents(&self.points).1
    }

    fn render(&self, scales: &ScaleSet, axis: YAxis) -> Vec<Primitive> {
        let (x_scale, y_scale) = (scales.x(), scales.y_for(axis));
        let style = ShapeStyle::filled(self.color);
        let label = self.label.as_deref().unwrap_or_default();

        let mut out: Vec<Primitive> = self
            .points
            .iter()
            .map(|point| {
                let (px, py) = (x_scale.map(point.x), y_scale.map(point.y));
                let tip = tooltip([
                    ("x", point.x.to_string()),
                    ("y", point.y.to_string()),
                    ("label", label.to_owned()),
                ]);
                match self.marker {
                    MarkerShape::Circle => CirclePrimitive::new(px, py, self.size, style)
                        .with_tooltip(tip)
                        .into(),
                    MarkerShape::Square => {
                        let half = self.size / 2.0;
                        RectPrimitive::new(px - half, py - half, self.size, self.size, style)
                            .with_tooltip(tip)
                            .into()
                    }
                }
            })
            .collect();
        let markers = out.len();
        out.extend(series_title(self.title.as_deref(), scales));

        trace!(markers, marker = ?self.marker, "render scatter series");
        out
    }
}
