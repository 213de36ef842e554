use serde::{Deserialize, Serialize};

use crate::core::ticks::DEFAULT_TICK_COUNT;
use crate::core::{AxesConfig, Canvas, Theme};
use crate::error::{ChartError, ChartResult};
use crate::render::SvgOptions;

pub const DEFAULT_FIGURE_WIDTH: u32 = 400;
pub const DEFAULT_FIGURE_HEIGHT: u32 = 300;
pub const DEFAULT_FIGURE_PADDING: u32 = 50;

/// Public figure configuration.
///
/// Serializable so hosts can persist a figure setup alongside their data.
/// Every field has a default, so partial JSON documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Border band reserved on every side for ticks, labels and title.
    #[serde(default = "default_padding")]
    pub padding: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_true")]
    pub y_inverted: bool,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Emit a `viewBox` on the SVG root so the document scales.
    #[serde(default = "default_true")]
    pub viewbox: bool,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIGURE_WIDTH,
            height: DEFAULT_FIGURE_HEIGHT,
            padding: DEFAULT_FIGURE_PADDING,
            title: None,
            x_label: None,
            y_label: None,
            tick_count: DEFAULT_TICK_COUNT,
            y_inverted: true,
            show_grid: true,
            viewbox: true,
            theme: Theme::default(),
        }
    }
}

impl FigureConfig {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_y_inverted(mut self, y_inverted: bool) -> Self {
        self.y_inverted = y_inverted;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_viewbox(mut self, viewbox: bool) -> Self {
        self.viewbox = viewbox;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height, self.padding)
    }

    /// Layout settings handed to the axes builder.
    #[must_use]
    pub fn axes_config(&self) -> AxesConfig {
        AxesConfig {
            tick_count: self.tick_count,
            y_inverted: self.y_inverted,
            show_grid: self.show_grid,
            title: self.title.clone(),
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            theme: self.theme.clone(),
        }
    }

    #[must_use]
    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            viewbox: self.viewbox,
            font_family: self.theme.font_family.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse config: {e}")))
    }
}

fn default_width() -> u32 {
    DEFAULT_FIGURE_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_FIGURE_HEIGHT
}

fn default_padding() -> u32 {
    DEFAULT_FIGURE_PADDING
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_true() -> bool {
    true
}
