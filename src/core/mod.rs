pub mod axes;
pub mod bar_series;
pub mod box_plot_series;
pub mod domain;
pub mod donut_series;
pub mod heatmap_series;
pub mod histogram_series;
pub mod line_series;
pub mod pie_series;
pub mod scale;
pub mod scatter_series;
pub mod series;
pub mod stats;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axes::{AxesBuilder, AxesConfig, FrozenAxes, ScaleSet, YAxis};
pub use bar_series::{BarGeometry, BarSeries};
pub use box_plot_series::BoxPlotSeries;
pub use domain::{Domain, DomainAccumulator};
pub use donut_series::{DonutLabelFit, DonutSeries};
pub use heatmap_series::{HeatmapCell, HeatmapSeries, bucket_index};
pub use histogram_series::{HistogramBar, HistogramSeries};
pub use line_series::LineSeries;
pub use pie_series::{LabelPosition, PieSeries, SliceAngles, slice_angles};
pub use scale::{LinearScale, PixelRange};
pub use scatter_series::{MarkerShape, ScatterSeries};
pub use series::{SERIES_TITLE_FONT_PX, Series, SeriesKind, SeriesRender};
pub use stats::{BoxStats, Bins, Quartiles};
pub use theme::Theme;
pub use types::{Canvas, DataPoint, PlotArea};
