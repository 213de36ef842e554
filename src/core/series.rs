use serde::{Deserialize, Serialize};

use crate::core::{
    BarSeries, BoxPlotSeries, DataPoint, DonutSeries, Domain, HeatmapSeries, HistogramSeries,
    LineSeries, PieSeries, ScaleSet, ScatterSeries, YAxis,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Primitive, TextHAlign, TextPrimitive};

/// Color used by series that were not given one.
pub const DEFAULT_SERIES_COLOR: Color = Color::from_rgb8(0x1f, 0x77, 0xb4);

pub const SERIES_TITLE_FONT_PX: f64 = 16.0;
/// Distance of a series title baseline above the plot area.
const SERIES_TITLE_OFFSET_PX: f64 = 20.0;

/// Contract shared by every chart type.
///
/// Extents feed domain aggregation during registration; `render` runs only
/// against frozen scales and never fails for a constructed series.
pub trait SeriesRender {
    /// Values this series contributes to the X domain, `None` when it ignores X.
    fn x_extent(&self) -> Option<Domain>;

    /// Values this series contributes to its Y axis, `None` when it ignores Y.
    fn y_extent(&self) -> Option<Domain>;

    fn render(&self, scales: &ScaleSet, axis: YAxis) -> Vec<Primitive>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Bar,
    Scatter,
    Pie,
    Donut,
    Histogram,
    BoxPlot,
    Heatmap,
}

/// Closed set of chart types.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Line(LineSeries),
    Bar(BarSeries),
    Scatter(ScatterSeries),
    Pie(PieSeries),
    Donut(DonutSeries),
    Histogram(HistogramSeries),
    BoxPlot(BoxPlotSeries),
    Heatmap(HeatmapSeries),
}

impl Series {
    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Line(_) => SeriesKind::Line,
            Self::Bar(_) => SeriesKind::Bar,
            Self::Scatter(_) => SeriesKind::Scatter,
            Self::Pie(_) => SeriesKind::Pie,
            Self::Donut(_) => SeriesKind::Donut,
            Self::Histogram(_) => SeriesKind::Histogram,
            Self::BoxPlot(_) => SeriesKind::BoxPlot,
            Self::Heatmap(_) => SeriesKind::Heatmap,
        }
    }

    fn as_render(&self) -> &dyn SeriesRender {
        match self {
            Self::Line(series) => series,
            Self::Bar(series) => series,
            Self::Scatter(series) => series,
            Self::Pie(series) => series,
            Self::Donut(series) => series,
            Self::Histogram(series) => series,
            Self::BoxPlot(series) => series,
            Self::Heatmap(series) => series,
        }
    }
}

impl SeriesRender for Series {
    fn x_extent(&self) -> Option<Domain> {
        self.as_render().x_extent()
    }

    fn y_extent(&self) -> Option<Domain> {
        self.as_render().y_extent()
    }

    fn render(&self, scales: &ScaleSet, axis: YAxis) -> Vec<Primitive> {
        self.as_render().render(scales, axis)
    }
}

macro_rules! impl_series_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Series {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_series_from!(
    Line => LineSeries,
    Bar => BarSeries,
    Scatter => ScatterSeries,
    Pie => PieSeries,
    Donut => DonutSeries,
    Histogram => HistogramSeries,
    BoxPlot => BoxPlotSeries,
    Heatmap => HeatmapSeries,
);

pub(crate) fn ensure_finite(values: &[f64], field: &'static str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "`{field}` must contain only finite values"
        )))
    }
}

/// Zips `x`/`y` into points after checking lengths and finiteness.
pub(crate) fn zip_points(x: &[f64], y: &[f64]) -> ChartResult<Vec<DataPoint>> {
    if x.len() != y.len() {
        return Err(ChartError::ShapeMismatch {
            field: "y",
            expected: x.len(),
            actual: y.len(),
        });
    }
    ensure_finite(x, "x")?;
    ensure_finite(y, "y")?;
    Ok(x.iter()
        .zip(y)
        .map(|(&x, &y)| DataPoint::new(x, y))
        .collect())
}

pub(crate) fn ensure_finite_points(points: &[DataPoint]) -> ChartResult<()> {
    if points.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(
            "`points` must contain only finite coordinates".to_owned(),
        ))
    }
}

pub(crate) fn ensure_positive(value: f64, field: &'static str) -> ChartResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!(
            "`{field}` must be finite and > 0"
        )))
    }
}

pub(crate) fn point_extents(points: &[DataPoint]) -> (Option<Domain>, Option<Domain>) {
    (
        Domain::from_values(points.iter().map(|p| p.x)),
        Domain::from_values(points.iter().map(|p| p.y)),
    )
}

/// Centered heading above the plot area. Missing or empty titles emit nothing.
pub(crate) fn series_title(title: Option<&str>, scales: &ScaleSet) -> Option<Primitive> {
    let title = title.filter(|title| !title.is_empty())?;
    let canvas = scales.canvas();
    Some(
        TextPrimitive::new(
            title,
            f64::from(canvas.width) / 2.0,
            f64::from(canvas.padding) - SERIES_TITLE_OFFSET_PX,
            SERIES_TITLE_FONT_PX,
            scales.text_color(),
            TextHAlign::Center,
        )
        .into(),
    )
}
