use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Half-width used to widen a single-valued domain: `[v, v]` becomes
/// `[v - 1, v + 1]`.
pub const DEGENERATE_DOMAIN_HALF_SPAN: f64 = 1.0;

/// Closed numeric interval `[min, max]` of one data axis, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// Fallback used when no series contributes to an axis.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "domain bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(ChartError::InvalidData(format!(
                "domain min ({min}) must be <= max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    /// Smallest domain covering every finite value, `None` when there is none.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |extent: Option<Self>, value| {
                Some(match extent {
                    Some(domain) => domain.include(value),
                    None => Self {
                        min: value,
                        max: value,
                    },
                })
            })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// `max - min`. Infinite when the bounds are further apart than `f64::MAX`;
    /// use [`Domain::fraction`] and [`Domain::lerp`] for arithmetic.
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Width of one of `parts` equal subdivisions, computed on halved bounds.
    #[must_use]
    pub fn step(self, parts: usize) -> f64 {
        (self.max / 2.0 - self.min / 2.0) / parts.max(1) as f64 * 2.0
    }

    /// Position of `value` relative to the bounds: 0 at `min`, 1 at `max`.
    ///
    /// Evaluated on halved operands so finite bounds never overflow. NaN for a
    /// degenerate domain.
    #[must_use]
    pub fn fraction(self, value: f64) -> f64 {
        (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
    }

    /// Inverse of [`Domain::fraction`]; exact at `t = 0` and `t = 1`.
    #[must_use]
    pub fn lerp(self, t: f64) -> f64 {
        (1.0 - t) * self.min + t * self.max
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    #[must_use]
    pub fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Widens a single-valued domain symmetrically; other domains are returned as-is.
    #[must_use]
    pub fn non_degenerate(self) -> Self {
        if self.is_degenerate() {
            let (min, max) = widen_around(self.min, DEGENERATE_DOMAIN_HALF_SPAN);
            Self { min, max }
        } else {
            self
        }
    }
}

/// `[value - half, value + half]`, with `half` grown to at least one ulp-scale
/// step of `value` so large magnitudes still widen, and clamped to finite bounds.
#[must_use]
pub fn widen_around(value: f64, half: f64) -> (f64, f64) {
    let half = half.max(value.abs() * f64::EPSILON);
    ((value - half).max(f64::MIN), (value + half).min(f64::MAX))
}

/// Running union of the extents contributed to one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomainAccumulator {
    extent: Option<Domain>,
}

impl DomainAccumulator {
    pub fn add(&mut self, extent: Option<Domain>) {
        if let Some(extent) = extent {
            self.extent = Some(match self.extent {
                Some(current) => current.union(extent),
                None => extent,
            });
        }
    }

    #[must_use]
    pub fn extent(self) -> Option<Domain> {
        self.extent
    }

    #[must_use]
    pub fn has_contributions(self) -> bool {
        self.extent.is_some()
    }

    /// Final scale domain: `UNIT` when empty, widened when degenerate.
    #[must_use]
    pub fn resolve(self) -> Domain {
        self.extent.unwrap_or(Domain::UNIT).non_degenerate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Domain, DomainAccumulator};

    #[test]
    fn from_values_skips_non_finite_samples() {
        let domain = Domain::from_values([3.0, f64::NAN, -2.0, f64::INFINITY, 7.5])
            .expect("finite values present");
        assert_eq!((domain.min(), domain.max()), (-2.0, 7.5));
        assert!(Domain::from_values([f64::NAN]).is_none());
    }

    #[test]
    fn degenerate_domain_widens_by_one_each_side() {
        let domain = Domain::new(4.0, 4.0).expect("valid").non_degenerate();
        assert_eq!((domain.min(), domain.max()), (3.0, 5.0));
    }

    #[test]
    fn huge_single_value_still_widens() {
        let domain = Domain::new(1e308, 1e308).expect("valid").non_degenerate();
        assert!(domain.min() < domain.max());
        assert!(domain.max().is_finite());

        let top = Domain::new(f64::MAX, f64::MAX).expect("valid").non_degenerate();
        assert!(top.min() < top.max());
    }

    #[test]
    fn fraction_and_lerp_survive_spans_beyond_f64_max() {
        let domain = Domain::new(-1e308, 1e308).expect("valid");
        assert!(domain.span().is_infinite());
        assert_eq!(domain.fraction(-1e308), 0.0);
        assert_eq!(domain.fraction(0.0), 0.5);
        assert_eq!(domain.fraction(1e308), 1.0);
        assert_eq!(domain.lerp(0.0), -1e308);
        assert_eq!(domain.lerp(1.0), 1e308);
        assert_eq!(domain.step(4), 5e307);
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        assert!(Domain::new(2.0, 1.0).is_err());
    }

    #[test]
    fn empty_accumulator_resolves_to_unit() {
        assert_eq!(DomainAccumulator::default().resolve(), Domain::UNIT);
    }
}
