//! glyphx: SVG charting engine.
//!
//! The crate is split the same way a chart is produced:
//! - `core` owns domains, scales, axes layout and per-chart-type geometry,
//! - `render` owns backend-agnostic primitives and the backends that
//!   serialize them (SVG, null),
//! - `api` composes series into a `Figure` and drives one render pass.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Figure, FigureConfig, PlotKind, Theme, plot};
pub use error::{ChartError, ChartResult};
