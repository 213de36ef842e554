use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel canvas of one figure.
///
/// `padding` is reserved on every side for axis lines, tick labels and the
/// title; scales only map into the inner plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Canvas {
    #[must_use]
    pub fn new(width: u32, height: u32, padding: u32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Valid when both dimensions leave a non-empty plot area after padding.
    #[must_use]
    pub fn is_valid(self) -> bool {
        let double_padding = u64::from(self.padding) * 2;
        u64::from(self.width) > double_padding && u64::from(self.height) > double_padding
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
                padding: self.padding,
            })
        }
    }

    #[must_use]
    pub fn plot_area(self) -> PlotArea {
        let padding = f64::from(self.padding);
        PlotArea {
            left: padding,
            top: padding,
            right: f64::from(self.width) - padding,
            bottom: f64::from(self.height) - padding,
        }
    }

    /// Geometric center of the whole canvas.
    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Usable pixel rectangle inside the canvas padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
