use glyphx::core::{Domain, LinearScale, PixelRange};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scale_boundaries_are_exact(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        start in -2_000.0f64..2_000.0,
        pixel_span in 1.0f64..4_000.0,
        inverted in any::<bool>()
    ) {
        let max = min + span;
        let end = if inverted { start - pixel_span } else { start + pixel_span };
        let domain = Domain::new(min, max).expect("valid domain");
        let scale = LinearScale::new(domain, PixelRange::new(start, end)).expect("valid scale");

        prop_assert_eq!(scale.map(min), start);
        prop_assert_eq!(scale.map(max), end);
    }

    #[test]
    fn scale_is_strictly_monotonic(
        min in -10_000.0f64..10_000.0,
        span in 1.0f64..10_000.0,
        a in 0.0f64..0.98,
        gap in 0.01f64..0.02,
        start in 0.0f64..500.0,
        pixel_span in 10.0f64..2_000.0
    ) {
        let domain = Domain::new(min, min + span).expect("valid domain");
        let forward = LinearScale::new(domain, PixelRange::new(start, start + pixel_span))
            .expect("valid scale");
        let inverted = LinearScale::new(domain, PixelRange::new(start + pixel_span, start))
            .expect("valid scale");

        let low = min + a * span;
        let high = min + (a + gap) * span;

        prop_assert!(forward.map(low) < forward.map(high));
        prop_assert!(inverted.map(low) > inverted.map(high));
    }

    #[test]
    fn scale_is_affine(
        min in -10_000.0f64..10_000.0,
        span in 0.1f64..10_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let domain = Domain::new(min, min + span).expect("valid domain");
        let scale = LinearScale::new(domain, PixelRange::new(10.0, 990.0)).expect("valid scale");

        let (va, vb) = (min + a * span, min + b * span);
        let midpoint = scale.map((va + vb) / 2.0);
        let average = (scale.map(va) + scale.map(vb)) / 2.0;

        prop_assert!((midpoint - average).abs() <= 1e-6);
    }

    #[test]
    fn degenerate_domain_maps_to_range_center(
        value in -1_000_000.0f64..1_000_000.0,
        start in -500.0f64..500.0,
        pixel_span in 1.0f64..2_000.0
    ) {
        let domain = Domain::new(value, value).expect("single-valued domain");
        let scale = LinearScale::new(domain, PixelRange::new(start, start + pixel_span))
            .expect("degenerate domain falls back");

        let px = scale.map(value);
        prop_assert!(px.is_finite());
        prop_assert!((px - (start + pixel_span / 2.0)).abs() <= 1e-6);
    }

    #[test]
    fn invert_round_trips(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        factor in 0.0f64..1.0
    ) {
        let domain = Domain::new(min, min + span).expect("valid domain");
        let scale = LinearScale::new(domain, PixelRange::new(1024.0, 0.0)).expect("valid scale");
        let value = min + factor * span;

        let recovered = scale.invert(scale.map(value));
        prop_assert!((recovered - value).abs() <= 1e-6 * (1.0 + value.abs()));
    }
}
