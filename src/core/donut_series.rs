use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::pie_series::{
    ensure_label_count, ensure_slice_values, polar, slice_angles, slice_tooltip, wedge_path,
};
use crate::core::series::SeriesRender;
use crate::core::{Domain, ScaleSet, SliceAngles, YAxis};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, Primitive, ShapeStyle, TextHAlign,
    TextPrimitive,
};

/// Space kept between the canvas edge and the largest possible ring.
const DONUT_EDGE_MARGIN_PX: f64 = 40.0;
const CALLOUT_LENGTH_PX: f64 = 20.0;
const LABEL_FONT_PX: f64 = 12.0;
const CALLOUT_COLOR: Color = Color::from_rgb8(0x33, 0x33, 0x33);
pub const DEFAULT_INNER_RADIUS_FRACTION: f64 = 0.5;

/// Outer-radius shrink heuristic applied when callout labels are shown.
///
/// These are tunable defaults, not layout guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutLabelFit {
    /// Labels longer than this many characters count as wide.
    pub long_label_chars: usize,
    /// Outer radius factor when any label is wide.
    pub wide_radius_factor: f64,
    /// Outer radius factor otherwise.
    pub narrow_radius_factor: f64,
}

impl Default for DonutLabelFit {
    fn default() -> Self {
        Self {
            long_label_chars: 10,
            wide_radius_factor: 0.75,
            narrow_radius_factor: 0.9,
        }
    }
}

impl DonutLabelFit {
    fn validate(self) -> ChartResult<Self> {
        for (field, factor) in [
            ("wide_radius_factor", self.wide_radius_factor),
            ("narrow_radius_factor", self.narrow_radius_factor),
        ] {
            if !factor.is_finite() || factor <= 0.0 || factor > 1.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{field}` must be finite and in (0, 1]"
                )));
            }
        }
        Ok(self)
    }
}

/// Ring slices with a hollow center and straight callout labels.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSeries {
    values: Vec<f64>,
    labels: Vec<String>,
    colors: Option<Vec<Color>>,
    show_labels: bool,
    interactive: bool,
    inner_radius_fraction: f64,
    label_fit: DonutLabelFit,
}

impl DonutSeries {
    /// Slices default to labels `"0"`, `"1"`, ... in input order.
    pub fn new(values: Vec<f64>) -> ChartResult<Self> {
        ensure_slice_values(&values)?;
        let labels = (0..values.len()).map(|index| index.to_string()).collect();
        Ok(Self {
            values,
            labels,
            colors: None,
            show_labels: true,
            interactive: true,
            inner_radius_fraction: DEFAULT_INNER_RADIUS_FRACTION,
            label_fit: DonutLabelFit::default(),
        })
    }

    pub fn with_labels<S: Into<String>>(mut self, labels: Vec<S>) -> ChartResult<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        ensure_label_count(&labels, &self.values)?;
        self.labels = labels;
        Ok(self)
    }

    /// Per-slice colors. Slices past the end use generated hues.
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    /// Whether slices carry the hover class. Tooltip data is emitted regardless.
    #[must_use]
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Hole radius as a share of the outer radius, in `[0, 1)`.
    pub fn with_inner_radius_fraction(mut self, fraction: f64) -> ChartResult<Self> {
        if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
            return Err(ChartError::InvalidData(
                "`inner_radius_fraction` must be finite and in [0, 1)".to_owned(),
            ));
        }
        self.inner_radius_fraction = fraction;
        Ok(self)
    }

    pub fn with_label_fit(mut self, label_fit: DonutLabelFit) -> ChartResult<Self> {
        self.label_fit = label_fit.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn slices(&self) -> Vec<SliceAngles> {
        slice_angles(&self.values)
    }

    /// `(outer, inner)` radii on the given canvas after label auto-fit.
    #[must_use]
    pub fn radii(&self, scales: &ScaleSet) -> (f64, f64) {
        let (cx, cy) = scales.canvas().center();
        let max_radius = (cx.min(cy) - DONUT_EDGE_MARGIN_PX).max(0.0);
        let outer = if self.show_labels {
            let wide = self
                .labels
                .iter()
                .any(|label| label.chars().count() > self.label_fit.long_label_chars);
            if wide {
                max_radius * self.label_fit.wide_radius_factor
            } else {
                max_radius * self.label_fit.narrow_radius_factor
            }
        } else {
            max_radius
        };
        (outer, outer * self.inner_radius_fraction)
    }

    fn slice_color(&self, index: usize) -> Color {
        self.colors
            .as_ref()
            .and_then(|colors| colors.get(index).copied())
            .unwrap_or_else(|| Color::from_hsl((index * 45 % 360) as f64, 0.7, 0.5))
    }
}

impl SeriesRender for DonutSeries {
    fn x_extent(&self) -> Option<Domain> {
        None
    }

    fn y_extent(&self) -> Option<Domain> {
        None
    }

    fn render(&self, scales: &ScaleSet, _axis: YAxis) -> Vec<Primitive> {
        let slices = self.slices();
        if slices.is_empty() {
            return Vec::new();
        }

        let (cx, cy) = scales.canvas().center();
        let (outer, inner) = self.radii(scales);
        let mut out = Vec::with_capacity(slices.len() * 3 + 1);

        for (index, slice) in slices.iter().enumerate() {
            let label = self.labels[index].as_str();
            let wedge = PathPrimitive::new(
                wedge_path(cx, cy, outer, *slice),
                ShapeStyle::filled(self.slice_color(index)),
            )
            .with_tooltip(slice_tooltip(Some(label), self.values[index]))
            .with_hover(self.interactive);
            out.push(wedge.into());

            if self.show_labels && !label.is_empty() {
                let (line_x, line_y) = polar(cx, cy, outer, slice.mid());
                let (label_x, label_y) = polar(cx, cy, outer + CALLOUT_LENGTH_PX, slice.mid());
                out.push(
                    LinePrimitive::new(line_x, line_y, label_x, label_y, 1.0, CALLOUT_COLOR).into(),
                );
                out.push(
                    TextPrimitive::new(
                        label,
                        label_x,
                        label_y,
                        LABEL_FONT_PX,
                        scales.text_color(),
                        TextHAlign::Center,
                    )
                    .into(),
                );
            }
        }

        if inner > 0.0 {
            let hole = ShapeStyle::filled(scales.background());
            out.push(CirclePrimitive::new(cx, cy, inner, hole).into());
        }

        trace!(slices = slices.len(), outer, inner, "render donut series");
        out
    }
}
