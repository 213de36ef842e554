//! Opt-in log output for `glyphx` rendering.
//!
//! `Figure::build_frame` logs `figure frame built` at debug level with the
//! series and primitive totals, and `series rendered` at trace level for each
//! series with its kind, Y axis and primitive count. Axes finalization logs
//! the resolved X, Y and Y2 domains. Degenerate inputs are logged at debug
//! level where they change the output:
//! - a series bound to Y2 with no secondary scale falls back to Y
//! - a pie or donut whose values sum to zero emits no slices
//! - a constant-valued heatmap collapses onto one color bucket
//!
//! Events go nowhere until a subscriber is installed, either by the host or
//! through `init_default_tracing`.

/// Installs a compact `tracing_subscriber` formatter filtered by `RUST_LOG`
/// (default `info`), so `RUST_LOG=glyphx=trace` shows every event above.
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
