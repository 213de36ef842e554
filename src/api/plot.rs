use serde::{Deserialize, Serialize};

use crate::core::{BarSeries, LineSeries, ScatterSeries, Series};
use crate::error::ChartResult;

use super::{Figure, FigureConfig};

/// Chart types available through [`plot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    #[default]
    Line,
    Bar,
    Scatter,
}

impl PlotKind {
    /// Parses a kind name. Unknown names fall back to `Line`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bar" => Self::Bar,
            "scatter" => Self::Scatter,
            _ => Self::Line,
        }
    }
}

/// Builds a default-configured figure holding one `x`/`y` series.
pub fn plot(x: &[f64], y: &[f64], kind: PlotKind) -> ChartResult<Figure> {
    let series: Series = match kind {
        PlotKind::Line => LineSeries::new(x, y)?.into(),
        PlotKind::Bar => BarSeries::new(x, y)?.into(),
        PlotKind::Scatter => ScatterSeries::new(x, y)?.into(),
    };
    Ok(Figure::new(FigureConfig::default()).with_series(series))
}
