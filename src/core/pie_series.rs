use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use tracing::{debug, trace};

use crate::core::series::{SeriesRender, ensure_finite, ensure_positive, series_title};
use crate::core::{Domain, ScaleSet, YAxis};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, PathCommand, PathCommands, PathPrimitive, Primitive, ShapeStyle,
    TextHAlign, TextPrimitive, Tooltip, tooltip,
};

/// Default pie radius relative to `min(cx, cy)`.
const PIE_RADIUS_FACTOR: f64 = 0.6;
/// Elbow distance outside the rim: `BASE + EXTRA * |sin(mid)|` times the radius.
const ELBOW_BASE_FACTOR: f64 = 0.15;
const ELBOW_EXTRA_FACTOR: f64 = 0.2;
const LABEL_SHIFT_PX: f64 = 30.0;
const INSIDE_LABEL_FACTOR: f64 = 0.6;
const LABEL_FONT_PX: f64 = 12.0;
const FULL_TURN_EPSILON_DEG: f64 = 1e-9;

pub const DEFAULT_PIE_COLORS: [Color; 4] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
];

/// Angular extent of one slice in degrees, clockwise on screen from +X.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceAngles {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl SliceAngles {
    #[must_use]
    pub fn span(self) -> f64 {
        self.end_deg - self.start_deg
    }

    #[must_use]
    pub fn mid(self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

/// Sequential slice angles starting at 0°. Empty when the total is zero.
///
/// Values are divided by their maximum before summing, so the total stays
/// finite for any finite input.
#[must_use]
pub fn slice_angles(values: &[f64]) -> Vec<SliceAngles> {
    let max = values.iter().copied().fold(0.0, f64::max);
    let total: f64 = if max > 0.0 {
        values.iter().map(|value| value / max).sum()
    } else {
        0.0
    };
    if !total.is_finite() || total <= 0.0 {
        debug!(slices = values.len(), "slice total is zero, emitting no slices");
        return Vec::new();
    }

    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let end = start + value / max / total * 360.0;
            let slice = SliceAngles {
                start_deg: start,
                end_deg: end,
            };
            start = end;
            slice
        })
        .collect()
}

/// Point on a circle of radius `r` about `(cx, cy)` at `angle_deg`.
#[must_use]
pub fn polar(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Closed wedge: rim arc from start to end angle, then a line back to the center.
///
/// A full-turn slice is split into two half arcs since an SVG arc whose end
/// equals its start draws nothing.
#[must_use]
pub fn wedge_path(cx: f64, cy: f64, r: f64, slice: SliceAngles) -> PathCommands {
    let (x1, y1) = polar(cx, cy, r, slice.start_deg);
    let (x2, y2) = polar(cx, cy, r, slice.end_deg);

    if slice.span() >= 360.0 - FULL_TURN_EPSILON_DEG {
        let (xm, ym) = polar(cx, cy, r, slice.start_deg + 180.0);
        let half = |x, y| PathCommand::ArcTo {
            rx: r,
            ry: r,
            large_arc: false,
            sweep: true,
            x,
            y,
        };
        return smallvec![
            PathCommand::MoveTo { x: x1, y: y1 },
            half(xm, ym),
            half(x1, y1),
            PathCommand::Close,
        ];
    }

    smallvec![
        PathCommand::MoveTo { x: x1, y: y1 },
        PathCommand::ArcTo {
            rx: r,
            ry: r,
            large_arc: slice.span() > 180.0,
            sweep: true,
            x: x2,
            y: y2,
        },
        PathCommand::LineTo { x: cx, y: cy },
        PathCommand::Close,
    ]
}

pub(crate) fn ensure_slice_values(values: &[f64]) -> ChartResult<()> {
    ensure_finite(values, "values")?;
    if values.iter().any(|value| *value < 0.0) {
        return Err(ChartError::InvalidData(
            "`values` must be >= 0".to_owned(),
        ));
    }
    Ok(())
}

pub(crate) fn ensure_label_count(labels: &[String], values: &[f64]) -> ChartResult<()> {
    if labels.len() == values.len() {
        Ok(())
    } else {
        Err(ChartError::ShapeMismatch {
            field: "labels",
            expected: values.len(),
            actual: labels.len(),
        })
    }
}

pub(crate) fn slice_tooltip(label: Option<&str>, value: f64) -> Tooltip {
    match label {
        Some(label) => tooltip([("label", label.to_owned()), ("value", value.to_string())]),
        None => tooltip([("value", value.to_string())]),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPosition {
    /// Elbow callout outside the rim.
    #[default]
    Outside,
    /// Centered text inside the slice, no callout.
    Inside,
}

/// Proportional slices about the canvas center.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSeries {
    values: Vec<f64>,
    labels: Option<Vec<String>>,
    title: Option<String>,
    colors: Vec<Color>,
    label_position: LabelPosition,
    radius: Option<f64>,
}

impl PieSeries {
    pub fn new(values: Vec<f64>) -> ChartResult<Self> {
        ensure_slice_values(&values)?;
        Ok(Self {
            values,
            labels: None,
            title: None,
            colors: DEFAULT_PIE_COLORS.to_vec(),
            label_position: LabelPosition::Outside,
            radius: None,
        })
    }

    pub fn with_labels<S: Into<String>>(mut self, labels: Vec<S>) -> ChartResult<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        ensure_label_count(&labels, &self.values)?;
        self.labels = Some(labels);
        Ok(self)
    }

    /// Slice colors, cycled when there are more slices than colors.
    pub fn with_colors(mut self, colors: Vec<Color>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::EmptyInput { field: "colors" });
        }
        self.colors = colors;
        Ok(self)
    }

    #[must_use]
    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    /// Heading centered above the plot area. An empty title emits nothing.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_radius(mut self, radius: f64) -> ChartResult<Self> {
        self.radius = Some(ensure_positive(radius, "radius")?);
        Ok(self)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn slices(&self) -> Vec<SliceAngles> {
        slice_angles(&self.values)
    }

    /// Center and radius used on a canvas of the given scales.
    #[must_use]
    pub fn geometry(&self, scales: &ScaleSet) -> (f64, f64, f64) {
        let (cx, cy) = scales.canvas().center();
        let radius = self.radius.unwrap_or(cx.min(cy) * PIE_RADIUS_FACTOR);
        (cx, cy, radius)
    }

    fn push_label(
        &self,
        out: &mut Vec<Primitive>,
        center: (f64, f64),
        r: f64,
        slice: SliceAngles,
        text: &str,
    ) {
        let (cx, cy) = center;
        let mid = slice.mid();
        match self.label_position {
            LabelPosition::Inside => {
                let (x, y) = polar(cx, cy, r * INSIDE_LABEL_FACTOR, mid);
                out.push(
                    TextPrimitive::new(text, x, y, LABEL_FONT_PX, Color::BLACK, TextHAlign::Center)
                        .into(),
                );
            }
            LabelPosition::Outside => {
                let rad = mid.to_radians();
                let (start_x, start_y) = polar(cx, cy, r, mid);
                let elbow = r * ELBOW_BASE_FACTOR + r * ELBOW_EXTRA_FACTOR * rad.sin().abs();
                let (elbow_x, elbow_y) = polar(cx, cy, r + elbow, mid);
                let right_side = rad.cos() >= 0.0;
                let label_x = if right_side {
                    elbow_x + LABEL_SHIFT_PX
                } else {
                    elbow_x - LABEL_SHIFT_PX
                };

                out.push(
                    LinePrimitive::new(start_x, start_y, elbow_x, elbow_y, 1.0, Color::BLACK).into(),
                );
                out.push(
                    LinePrimitive::new(elbow_x, elbow_y, label_x, elbow_y, 1.0, Color::BLACK).into(),
                );
                let align = if right_side {
                    TextHAlign::Left
                } else {
                    TextHAlign::Right
                };
                out.push(
                    TextPrimitive::new(text, label_x, elbow_y, LABEL_FONT_PX, Color::BLACK, align)
                        .into(),
                );
            }
        }
    }
}

impl SeriesRender for PieSeries {
    fn x_extent(&self) -> Option<Domain> {
        None
    }

    fn y_extent(&self) -> Option<Domain> {
        None
    }

    fn render(&self, scales: &ScaleSet, _axis: YAxis) -> Vec<Primitive> {
        let (cx, cy, radius) = self.geometry(scales);
        let slices = self.slices();
        let mut out = Vec::with_capacity(slices.len() * 4);

        for (index, (slice, value)) in slices.iter().zip(&self.values).enumerate() {
            let label = self.labels.as_ref().map(|labels| labels[index].as_str());
            let color = self.colors[index % self.colors.len()];
            out.push(
                PathPrimitive::new(
                    wedge_path(cx, cy, radius, *slice),
                    ShapeStyle::filled(color).with_stroke(Color::BLACK, 1.0),
                )
                .with_tooltip(slice_tooltip(label, *value))
                .into(),
            );
            if let Some(text) = label.filter(|text| !text.is_empty()) {
                self.push_label(&mut out, (cx, cy), radius, *slice, text);
            }
        }
        out.extend(series_title(self.title.as_deref(), scales));

        trace!(slices = slices.len(), primitives = out.len(), "render pie series");
        out
    }
}
