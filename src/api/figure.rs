use tracing::{debug, trace};

use crate::core::{AxesBuilder, FrozenAxes, Series, SeriesRender, YAxis};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, SvgRenderer};

use super::FigureConfig;

/// One series plus the vertical axis it is measured against.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSeries {
    pub series: Series,
    pub axis: YAxis,
}

/// Ordered series list plus figure configuration.
///
/// Insertion order is paint order. Every render pass builds fresh axes from
/// the full series list, so a figure holds no scale state between passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    config: FigureConfig,
    series: Vec<PlacedSeries>,
}

impl Figure {
    #[must_use]
    pub fn new(config: FigureConfig) -> Self {
        Self {
            config,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FigureConfig {
        &mut self.config
    }

    /// Appends a series measured against the primary Y axis.
    pub fn add(&mut self, series: impl Into<Series>) -> &mut Self {
        self.add_on(series, YAxis::Primary)
    }

    /// Appends a series measured against the secondary Y axis.
    pub fn add_secondary(&mut self, series: impl Into<Series>) -> &mut Self {
        self.add_on(series, YAxis::Secondary)
    }

    pub fn add_on(&mut self, series: impl Into<Series>, axis: YAxis) -> &mut Self {
        self.series.push(PlacedSeries {
            series: series.into(),
            axis,
        });
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: impl Into<Series>) -> Self {
        self.add(series);
        self
    }

    #[must_use]
    pub fn series(&self) -> &[PlacedSeries] {
        &self.series
    }

    /// Registration phase: every series contributes its extents, then the
    /// axes freeze.
    pub fn build_axes(&self) -> ChartResult<FrozenAxes> {
        let mut builder = AxesBuilder::new(self.config.canvas(), self.config.axes_config())?;
        for placed in &self.series {
            builder.register(&placed.series, placed.axis);
        }
        builder.finalize()
    }

    /// Decorations followed by every series' primitives, in insertion order.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        let axes = self.build_axes()?;
        let scales = axes.scales();
        let mut frame = RenderFrame::new(self.config.canvas());
        frame.extend(axes.decorations());

        for placed in &self.series {
            let before = frame.len();
            frame.extend(placed.series.render(scales, placed.axis));
            trace!(
                kind = ?placed.series.kind(),
                axis = ?placed.axis,
                primitives = frame.len() - before,
                "series rendered"
            );
        }

        debug!(
            series = self.series.len(),
            primitives = frame.len(),
            "figure frame built"
        );
        Ok(frame)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_frame()?;
        renderer.render(&frame)
    }

    /// Standalone SVG document for the current series list.
    pub fn to_svg(&self) -> ChartResult<String> {
        let mut renderer = SvgRenderer::new(self.config.svg_options());
        self.render(&mut renderer)?;
        Ok(renderer.into_document())
    }
}
