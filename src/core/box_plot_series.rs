use tracing::trace;

use crate::core::series::{DEFAULT_SERIES_COLOR, SeriesRender, ensure_finite, ensure_positive};
use crate::core::stats::{BoxStats, box_stats};
use crate::core::{Domain, ScaleSet, YAxis};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, Primitive, RectPrimitive, ShapeStyle, tooltip,
};

pub const DEFAULT_BOX_WIDTH_PX: f64 = 20.0;
pub const DEFAULT_BOX_POSITION: f64 = 0.5;
const BOX_FILL_OPACITY: f64 = 0.4;
const MEDIAN_STROKE_PX: f64 = 2.0;
const OUTLIER_RADIUS_PX: f64 = 3.0;

/// Quartile box with Tukey whiskers for one sample, drawn at `position` on X.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotSeries {
    stats: BoxStats,
    position: f64,
    box_width: f64,
    color: Color,
    label: Option<String>,
}

impl BoxPlotSeries {
    pub fn new(data: &[f64]) -> ChartResult<Self> {
        Ok(Self {
            stats: box_stats(data)?,
            position: DEFAULT_BOX_POSITION,
            box_width: DEFAULT_BOX_WIDTH_PX,
            color: DEFAULT_SERIES_COLOR,
            label: None,
        })
    }

    pub fn with_position(mut self, position: f64) -> ChartResult<Self> {
        ensure_finite(&[position], "position")?;
        self.position = position;
        Ok(self)
    }

    /// Box width in pixels.
    pub fn with_box_width(mut self, width: f64) -> ChartResult<Self> {
        self.box_width = ensure_positive(width, "box_width")?;
        Ok(self)
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
    pub fn stats(&self) -> &BoxStats {
        &self.stats
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }
}

impl SeriesRender for BoxPlotSeries {
    fn x_extent(&self) -> Option<Domain> {
        Domain::from_values([self.position])
    }

    fn y_extent(&self) -> Option<Domain> {
        Domain::from_values([self.stats.min, self.stats.max])
    }

    fn render(&self, scales: &ScaleSet, axis: YAxis) -> Vec<Primitive> {
        let (x_scale, y_scale) = (scales.x(), scales.y_for(axis));
        let stats = &self.stats;
        let q = stats.quartiles;
        let cx = x_scale.map(self.position);
        let half = self.box_width / 2.0;

        let (q1_px, q2_px, q3_px) = (y_scale.map(q.q1), y_scale.map(q.q2), y_scale.map(q.q3));
        let low_px = y_scale.map(stats.whisker_low);
        let high_px = y_scale.map(stats.whisker_high);

        let mut out: Vec<Primitive> = Vec::with_capacity(4 + stats.outliers.len());
        out.push(LinePrimitive::new(cx, low_px, cx, q1_px, 1.0, self.color).into());
        out.push(LinePrimitive::new(cx, q3_px, cx, high_px, 1.0, self.color).into());

        let style = ShapeStyle::filled(self.color)
            .with_fill_opacity(BOX_FILL_OPACITY)
            .with_stroke(self.color, 1.0);
        let (box_top, box_height) = (q1_px.min(q3_px), (q1_px - q3_px).abs());
        out.push(
            RectPrimitive::new(cx - half, box_top, self.box_width, box_height, style)
                .with_tooltip(tooltip([
                    ("label", self.label.clone().unwrap_or_default()),
                    ("q1", q.q1.to_string()),
                    ("q2", q.q2.to_string()),
                    ("q3", q.q3.to_string()),
                ]))
                .into(),
        );
        out.push(
            LinePrimitive::new(cx - half, q2_px, cx + half, q2_px, MEDIAN_STROKE_PX, self.color)
                .into(),
        );

        for outlier in &stats.outliers {
            out.push(
                CirclePrimitive::new(
                    cx,
                    y_scale.map(*outlier),
                    OUTLIER_RADIUS_PX,
                    ShapeStyle::stroked(self.color, 1.0),
                )
                .into(),
            );
        }

        trace!(outliers = stats.outliers.len(), "render box plot series");
        out
    }
}
