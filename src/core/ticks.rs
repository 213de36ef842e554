use crate::core::Domain;

pub const DEFAULT_TICK_COUNT: usize = 5;
const MAX_TICK_DECIMALS: i32 = 6;

/// `steps` evenly spaced values from `start` to `end`, both included.
#[must_use]
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let last = (steps - 1) as f64;
    (0..steps)
        .map(|i| {
            if i + 1 == steps {
                end
            } else {
                let t = i as f64 / last;
                (1.0 - t) * start + t * end
            }
        })
        .collect()
}

/// Tick positions spanning the whole domain, endpoints included.
#[must_use]
pub fn tick_values(domain: Domain, count: usize) -> Vec<f64> {
    linspace(domain.min(), domain.max(), count)
}

/// Formats a tick value with just enough decimals to tell neighbours apart.
#[must_use]
pub fn format_tick_label(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (1 - step.log10().floor() as i32).clamp(0, MAX_TICK_DECIMALS)
    } else {
        2
    };
    let text = format!("{:.*}", decimals as usize, value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        text
    };
    if text == "-0" { "0".to_owned() } else { text }
}
