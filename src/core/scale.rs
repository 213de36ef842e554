use serde::{Deserialize, Serialize};

use crate::core::Domain;
use crate::error::{ChartError, ChartResult};

/// Pixel interval a scale maps onto. `start` receives the domain minimum;
/// `start > end` expresses an inverted axis (e.g. chart-up Y on a screen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }
}

/// Immutable affine mapping from a data domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: Domain,
    range: PixelRange,
}

impl LinearScale {
    /// Builds a scale; a single-valued `domain` is widened instead of rejected.
    pub fn new(domain: Domain, range: PixelRange) -> ChartResult<Self> {
        if !range.start.is_finite() || !range.end.is_finite() || range.start == range.end {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain: domain.non_degenerate(),
            range,
        })
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> PixelRange {
        self.range
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.range.end < self.range.start
    }

    /// Maps `value` to pixel space. Values outside the domain extrapolate linearly.
    ///
    /// Written as an interpolation so both domain endpoints land exactly on
    /// the range endpoints.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let t = self.domain.fraction(value);
        (1.0 - t) * self.range.start + t * self.range.end
    }

    /// Checked variant of [`LinearScale::map`] rejecting non-finite input.
    pub fn try_map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        Ok(self.map(value))
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let t = (pixel - self.range.start) / self.range.span();
        self.domain.lerp(t)
    }

    /// Absolute pixel distance between two domain values.
    #[must_use]
    pub fn pixel_distance(self, from: f64, to: f64) -> f64 {
        (self.map(to) - self.map(from)).abs()
    }
}
