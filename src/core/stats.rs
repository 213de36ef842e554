use serde::{Deserialize, Serialize};

use crate::core::domain::{Domain, widen_around};
use crate::core::ticks::linspace;
use crate::error::{ChartError, ChartResult};

/// Tukey fence multiplier applied to the interquartile range.
pub const TUKEY_FENCE_FACTOR: f64 = 1.5;

/// Half-width used to bin a sample whose values are all identical.
const CONSTANT_SAMPLE_BIN_HALF_SPAN: f64 = 0.5;

fn sorted_finite(data: &[f64], field: &'static str) -> ChartResult<Vec<f64>> {
    if data.is_empty() {
        return Err(ChartError::EmptyInput { field });
    }
    if data.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "`{field}` must contain only finite values"
        )));
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Percentile of an ascending sample using linear interpolation between the
/// two closest ranks (`q` in `0..=1`).
#[must_use]
pub fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        len => {
            let rank = (len - 1) as f64 * q.clamp(0.0, 1.0);
            let lower = rank.floor() as usize;
            let upper = (lower + 1).min(len - 1);
            let fraction = rank - lower as f64;
            sorted[lower] + fraction * (sorted[upper] - sorted[lower])
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    #[must_use]
    pub fn iqr(self) -> f64 {
        self.q3 - self.q1
    }
}

pub fn quartiles(data: &[f64]) -> ChartResult<Quartiles> {
    let sorted = sorted_finite(data, "data")?;
    Ok(quartiles_sorted(&sorted))
}

fn quartiles_sorted(sorted: &[f64]) -> Quartiles {
    Quartiles {
        q1: percentile_sorted(sorted, 0.25),
        q2: percentile_sorted(sorted, 0.50),
        q3: percentile_sorted(sorted, 0.75),
    }
}

/// Five-number summary with Tukey whiskers clipped to the observed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub quartiles: Quartiles,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub min: f64,
    pub max: f64,
    /// Samples strictly outside the whiskers, ascending.
    pub outliers: Vec<f64>,
}

pub fn box_stats(data: &[f64]) -> ChartResult<BoxStats> {
    let sorted = sorted_finite(data, "data")?;
    let quartiles = quartiles_sorted(&sorted);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let fence = TUKEY_FENCE_FACTOR * quartiles.iqr();
    let whisker_low = min.max(quartiles.q1 - fence);
    let whisker_high = max.min(quartiles.q3 + fence);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|value| *value < whisker_low || *value > whisker_high)
        .collect();

    Ok(BoxStats {
        quartiles,
        whisker_low,
        whisker_high,
        min,
        max,
        outliers,
    })
}

/// Equal-width bins: `counts.len() + 1` edges, the last bin closed on the right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bins {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Bins {
    /// Midpoint of every bin, in bin order.
    #[must_use]
    pub fn centers(&self) -> Vec<f64> {
        self.edges
            .windows(2)
            .map(|pair| (pair[0] + pair[1]) / 2.0)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

pub fn histogram(data: &[f64], bins: usize) -> ChartResult<Bins> {
    if bins == 0 {
        return Err(ChartError::InvalidData(
            "histogram bin count must be > 0".to_owned(),
        ));
    }
    let sorted = sorted_finite(data, "data")?;
    let mut range = Domain::new(sorted[0], sorted[sorted.len() - 1])?;
    if range.is_degenerate() {
        let (low, high) = widen_around(range.min(), CONSTANT_SAMPLE_BIN_HALF_SPAN);
        range = Domain::new(low, high)?;
    }

    let edges = linspace(range.min(), range.max(), bins + 1);
    let mut counts = vec![0usize; bins];
    for value in sorted {
        let index = (range.fraction(value) * bins as f64).floor() as usize;
        counts[index.min(bins - 1)] += 1;
    }

    Ok(Bins { edges, counts })
}

/// Min-max normalization to `0..=1`. A constant sample maps to all zeros.
pub fn normalize(data: &[f64]) -> ChartResult<Vec<f64>> {
    let sorted = sorted_finite(data, "data")?;
    let range = Domain::new(sorted[0], sorted[sorted.len() - 1])?;
    if range.is_degenerate() {
        return Ok(vec![0.0; data.len()]);
    }
    Ok(data.iter().map(|value| range.fraction(*value)).collect())
}

#[cfg(test)]
mod tests {
    use super::{box_stats, histogram, normalize, percentile_sorted, quartiles};

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(percentile_sorted(&sorted, 1.0), 4.0);
        assert!((percentile_sorted(&sorted, 0.5) - 2.5).abs() <= 1e-12);
    }

    #[test]
    fn quartiles_of_one_to_ten() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let q = quartiles(&data).expect("quartiles");
        assert!((q.q1 - 3.25).abs() <= 1e-12);
        assert!((q.q2 - 5.5).abs() <= 1e-12);
        assert!((q.q3 - 7.75).abs() <= 1e-12);
    }

    #[test]
    fn whiskers_are_clipped_and_outliers_reported() {
        let stats = box_stats(&[1.0, 2.0, 3.0, 4.0, 100.0]).expect("stats");
        assert_eq!(stats.whisker_low, 1.0);
        assert!(stats.whisker_high < 100.0);
        assert_eq!(stats.outliers, vec![100.0]);
    }

    #[test]
    fn histogram_closes_last_bin_on_the_right() {
        let bins = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).expect("bins");
        assert_eq!(bins.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(bins.counts, vec![1, 1, 1, 2]);
    }

    #[test]
    fn histogram_of_constant_sample_widens_range() {
        let bins = histogram(&[3.0, 3.0, 3.0], 2).expect("bins");
        assert_eq!(bins.edges, vec![2.5, 3.0, 3.5]);
        assert_eq!(bins.counts, vec![0, 3]);
    }

    #[test]
    fn histogram_spreads_extreme_magnitudes_across_bins() {
        let bins = histogram(&[-1e308, 0.0, 1e308], 4).expect("bins");
        assert!(bins.edges.iter().all(|edge| edge.is_finite()));
        assert_eq!(bins.edges[2], 0.0);
        assert_eq!(bins.counts, vec![1, 0, 1, 1]);
    }

    #[test]
    fn normalize_constant_sample_is_all_zero() {
        assert_eq!(normalize(&[2.0, 2.0]).expect("normalize"), vec![0.0, 0.0]);
        assert_eq!(
            normalize(&[0.0, 5.0, 10.0]).expect("normalize"),
            vec![0.0, 0.5, 1.0]
        );
        assert_eq!(
            normalize(&[-1e308, 0.0, 1e308]).expect("normalize"),
            vec![0.0, 0.5, 1.0]
        );
    }

    #[test]
    fn empty_and_non_finite_samples_are_rejected() {
        assert!(quartiles(&[]).is_err());
        assert!(box_stats(&[1.0, f64::NAN]).is_err());
        assert!(histogram(&[1.0], 0).is_err());
    }
}
