use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::domain::DomainAccumulator;
use crate::core::series::{Series, SeriesRender};
use crate::core::ticks::{DEFAULT_TICK_COUNT, format_tick_label, tick_values};
use crate::core::{Canvas, Domain, LinearScale, PixelRange, PlotArea, Theme};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, Primitive, RectPrimitive, ShapeStyle, TextHAlign, TextPrimitive,
};

const TICK_LABEL_FONT_PX: f64 = 10.0;
const AXIS_LABEL_FONT_PX: f64 = 12.0;
const TITLE_FONT_PX: f64 = 16.0;
const TICK_LABEL_GAP_PX: f64 = 6.0;
const GRID_STROKE_PX: f64 = 1.0;
const AXIS_STROKE_PX: f64 = 1.5;

/// Which vertical axis a series is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAxis {
    #[default]
    Primary,
    Secondary,
}

/// Layout and decoration settings for one axes frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesConfig {
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    /// Maps the Y domain minimum to the bottom of the plot area.
    #[serde(default = "default_true")]
    pub y_inverted: bool,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            y_inverted: true,
            show_grid: true,
            title: None,
            x_label: None,
            y_label: None,
            theme: Theme::default(),
        }
    }
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_true() -> bool {
    true
}

/// Frozen scales for one render pass, plus the chrome colors series need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSet {
    canvas: Canvas,
    x: LinearScale,
    y: LinearScale,
    y2: Option<LinearScale>,
    background: Color,
    text_color: Color,
}

impl ScaleSet {
    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.canvas.plot_area()
    }

    #[must_use]
    pub fn x(&self) -> LinearScale {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> LinearScale {
        self.y
    }

    #[must_use]
    pub fn y2(&self) -> Option<LinearScale> {
        self.y2
    }

    /// Scale for `axis`. A secondary request without a secondary scale
    /// degrades to the primary one.
    #[must_use]
    pub fn y_for(&self, axis: YAxis) -> LinearScale {
        match (axis, self.y2) {
            (YAxis::Primary, _) => self.y,
            (YAxis::Secondary, Some(y2)) => y2,
            (YAxis::Secondary, None) => {
                debug!("no secondary y scale registered, using primary");
                self.y
            }
        }
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }
}

/// Registration phase: collects series extents per axis.
///
/// Scales only exist after [`AxesBuilder::finalize`], so no geometry can be
/// computed against a partially known domain.
#[derive(Debug, Clone)]
pub struct AxesBuilder {
    canvas: Canvas,
    config: AxesConfig,
    x: DomainAccumulator,
    y: DomainAccumulator,
    y2: DomainAccumulator,
}

impl AxesBuilder {
    pub fn new(canvas: Canvas, config: AxesConfig) -> ChartResult<Self> {
        canvas.validate()?;
        Ok(Self {
            canvas,
            config,
            x: DomainAccumulator::default(),
            y: DomainAccumulator::default(),
            y2: DomainAccumulator::default(),
        })
    }

    pub fn register(&mut self, series: &Series, axis: YAxis) -> &mut Self {
        self.register_extents(series.x_extent(), series.y_extent(), axis)
    }

    /// Registers raw extents, for callers that draw their own geometry on this frame.
    pub fn register_extents(
        &mut self,
        x_extent: Option<Domain>,
        y_extent: Option<Domain>,
        axis: YAxis,
    ) -> &mut Self {
        self.x.add(x_extent);
        match axis {
            YAxis::Primary => self.y.add(y_extent),
            YAxis::Secondary => self.y2.add(y_extent),
        }
        self
    }

    pub fn finalize(self) -> ChartResult<FrozenAxes> {
        let plot = self.canvas.plot_area();
        let y_range = if self.config.y_inverted {
            PixelRange::new(plot.bottom, plot.top)
        } else {
            PixelRange::new(plot.top, plot.bottom)
        };

        let x = LinearScale::new(self.x.resolve(), PixelRange::new(plot.left, plot.right))?;
        let y = LinearScale::new(self.y.resolve(), y_range)?;
        let y2 = if self.y2.has_contributions() {
            Some(LinearScale::new(self.y2.resolve(), y_range)?)
        } else {
            None
        };
        let cartesian =
            self.x.has_contributions() || self.y.has_contributions() || y2.is_some();

        debug!(
            x_domain = ?x.domain(),
            y_domain = ?y.domain(),
            y2_domain = ?y2.map(LinearScale::domain),
            cartesian,
            "axes finalized"
        );

        let scales = ScaleSet {
            canvas: self.canvas,
            x,
            y,
            y2,
            background: self.config.theme.background,
            text_color: self.config.theme.text,
        };
        Ok(FrozenAxes {
            config: self.config,
            scales,
            cartesian,
        })
    }
}

/// Render phase: read-only scales and decorations.
#[derive(Debug, Clone)]
pub struct FrozenAxes {
    config: AxesConfig,
    scales: ScaleSet,
    cartesian: bool,
}

impl FrozenAxes {
    #[must_use]
    pub fn scales(&self) -> &ScaleSet {
        &self.scales
    }

    #[must_use]
    pub fn config(&self) -> &AxesConfig {
        &self.config
    }

    /// `false` when only center-based charts (pie, donut, heatmap) were registered.
    #[must_use]
    pub fn is_cartesian(&self) -> bool {
        self.cartesian
    }

    /// Background, grid, tick labels, axis lines, axis labels and title, in paint order.
    ///
    /// Grid and axes are omitted when no series contributed to a domain.
    #[must_use]
    pub fn decorations(&self) -> Vec<Primitive> {
        let canvas = self.scales.canvas;
        let theme = &self.config.theme;
        let mut out = vec![Primitive::from(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(canvas.width),
            f64::from(canvas.height),
            ShapeStyle::filled(theme.background),
        ))];

        if self.cartesian {
            if self.config.show_grid {
                self.push_gridlines(&mut out);
            }
            self.push_tick_labels(&mut out);
            self.push_axis_lines(&mut out);
            self.push_axis_labels(&mut out);
        }

        if let Some(title) = self.config.title.as_deref().filter(|t| !t.is_empty()) {
            let y = (f64::from(canvas.padding) / 2.0).max(TITLE_FONT_PX);
            out.push(
                TextPrimitive::new(
                    title,
                    f64::from(canvas.width) / 2.0,
                    y,
                    TITLE_FONT_PX,
                    theme.text,
                    TextHAlign::Center,
                )
                .into(),
            );
        }

        out
    }

    fn tick_count(&self) -> usize {
        self.config.tick_count.max(2)
    }

    fn push_gridlines(&self, out: &mut Vec<Primitive>) {
        let plot = self.scales.plot_area();
        let color = self.config.theme.grid;
        let count = self.tick_count();

        for value in tick_values(self.scales.x.domain(), count) {
            let px = self.scales.x.map(value);
            out.push(LinePrimitive::new(px, plot.top, px, plot.bottom, GRID_STROKE_PX, color).into());
        }
        for value in tick_values(self.scales.y.domain(), count) {
            let py = self.scales.y.map(value);
            out.push(LinePrimitive::new(plot.left, py, plot.right, py, GRID_STROKE_PX, color).into());
        }
    }

    fn push_tick_labels(&self, out: &mut Vec<Primitive>) {
        let plot = self.scales.plot_area();
        let color = self.config.theme.text;
        let count = self.tick_count();

        let x_domain = self.scales.x.domain();
        let x_step = x_domain.step(count - 1);
        for value in tick_values(x_domain, count) {
            out.push(
                TextPrimitive::new(
                    format_tick_label(value, x_step),
                    self.scales.x.map(value),
                    plot.bottom + TICK_LABEL_GAP_PX + TICK_LABEL_FONT_PX,
                    TICK_LABEL_FONT_PX,
                    color,
                    TextHAlign::Center,
                )
                .into(),
            );
        }

        let vertical = [
            Some((self.scales.y, plot.left - TICK_LABEL_GAP_PX, TextHAlign::Right)),
            self.scales
                .y2
                .map(|y2| (y2, plot.right + TICK_LABEL_GAP_PX, TextHAlign::Left)),
        ];
        for (scale, x, align) in vertical.into_iter().flatten() {
            let domain = scale.domain();
            let step = domain.step(count - 1);
            for value in tick_values(domain, count) {
                out.push(
                    TextPrimitive::new(
                        format_tick_label(value, step),
                        x,
                        scale.map(value) + TICK_LABEL_FONT_PX * 0.35,
                        TICK_LABEL_FONT_PX,
                        color,
                        align,
                    )
                    .into(),
                );
            }
        }
    }

    fn push_axis_lines(&self, out: &mut Vec<Primitive>) {
        let plot = self.scales.plot_area();
        let color = self.config.theme.axis;

        out.push(
            RectPrimitive::new(
                plot.left,
                plot.top,
                plot.width(),
                plot.height(),
                ShapeStyle::default().with_stroke(color, GRID_STROKE_PX),
            )
            .into(),
        );
        out.push(
            LinePrimitive::new(plot.left, plot.bottom, plot.right, plot.bottom, AXIS_STROKE_PX, color)
                .into(),
        );
        out.push(
            LinePrimitive::new(plot.left, plot.top, plot.left, plot.bottom, AXIS_STROKE_PX, color)
                .into(),
        );
        if self.scales.y2.is_some() {
            out.push(
                LinePrimitive::new(plot.right, plot.top, plot.right, plot.bottom, AXIS_STROKE_PX, color)
                    .into(),
            );
        }
    }

    fn push_axis_labels(&self, out: &mut Vec<Primitive>) {
        let canvas = self.scales.canvas;
        let plot = self.scales.plot_area();
        let color = self.config.theme.text;
        let band = f64::from(canvas.padding) / 3.0;

        if let Some(label) = self.config.x_label.as_deref().filter(|l| !l.is_empty()) {
            out.push(
                TextPrimitive::new(
                    label,
                    (plot.left + plot.right) / 2.0,
                    f64::from(canvas.height) - band,
                    AXIS_LABEL_FONT_PX,
                    color,
                    TextHAlign::Center,
                )
                .into(),
            );
        }
        if let Some(label) = self.config.y_label.as_deref().filter(|l| !l.is_empty()) {
            out.push(
                TextPrimitive::new(
                    label,
                    band.max(AXIS_LABEL_FONT_PX),
                    (plot.top + plot.bottom) / 2.0,
                    AXIS_LABEL_FONT_PX,
                    color,
                    TextHAlign::Center,
                )
                .rotated(-90.0)
                .into(),
            );
        }
    }
}
