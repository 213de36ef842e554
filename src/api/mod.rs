mod config;
mod figure;
mod plot;

pub use crate::core::Theme;
pub use config::{
    DEFAULT_FIGURE_HEIGHT, DEFAULT_FIGURE_PADDING, DEFAULT_FIGURE_WIDTH, FigureConfig,
};
pub use figure::{Figure, PlacedSeries};
pub use plot::{PlotKind, plot};
