use approx::assert_relative_eq;
use glyphx::ChartError;
use glyphx::core::domain::DomainAccumulator;
use glyphx::core::ticks::{format_tick_label, linspace, tick_values};
use glyphx::core::{Domain, LinearScale, PixelRange};

fn scale(min: f64, max: f64, start: f64, end: f64) -> LinearScale {
    let domain = Domain::new(min, max).expect("valid domain");
    LinearScale::new(domain, PixelRange::new(start, end)).expect("valid scale")
}

#[test]
fn linear_scale_maps_endpoints_and_midpoint() {
    let scale = scale(0.0, 10.0, 0.0, 100.0);

    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(10.0), 100.0);
    assert_relative_eq!(scale.map(5.0), 50.0);
    assert!(!scale.is_inverted());
}

#[test]
fn linear_scale_extrapolates_outside_the_domain() {
    let scale = scale(0.0, 10.0, 0.0, 100.0);

    assert_relative_eq!(scale.map(-5.0), -50.0);
    assert_relative_eq!(scale.map(20.0), 200.0);
}

#[test]
fn inverted_range_maps_minimum_to_start() {
    let scale = scale(0.0, 10.0, 100.0, 0.0);

    assert!(scale.is_inverted());
    assert_eq!(scale.map(0.0), 100.0);
    assert_eq!(scale.map(10.0), 0.0);
    assert_relative_eq!(scale.map(2.5), 75.0);
}

#[test]
fn degenerate_domain_is_widened_symmetrically() {
    let scale = scale(3.0, 3.0, 0.0, 100.0);

    assert_eq!(scale.domain().min(), 2.0);
    assert_eq!(scale.domain().max(), 4.0);
    assert_eq!(scale.map(3.0), 50.0);
}

#[test]
fn zero_or_non_finite_pixel_range_is_rejected() {
    let domain = Domain::new(0.0, 1.0).expect("valid domain");

    let zero = LinearScale::new(domain, PixelRange::new(5.0, 5.0));
    assert!(matches!(zero, Err(ChartError::InvalidData(_))));

    let non_finite = LinearScale::new(domain, PixelRange::new(0.0, f64::INFINITY));
    assert!(non_finite.is_err());
}

#[test]
fn invert_recovers_domain_values() {
    let scale = scale(-20.0, 80.0, 400.0, 50.0);
    let px = scale.map(7.3);

    assert_relative_eq!(scale.invert(px), 7.3, epsilon = 1e-9);
}

#[test]
fn try_map_rejects_non_finite_values() {
    let scale = scale(0.0, 1.0, 0.0, 10.0);

    assert!(scale.try_map(f64::NAN).is_err());
    assert_eq!(scale.try_map(1.0).expect("finite"), 10.0);
}

#[test]
fn pixel_distance_is_direction_independent() {
    let scale = scale(0.0, 4.0, 200.0, 0.0);

    assert_relative_eq!(scale.pixel_distance(1.0, 3.0), 100.0);
    assert_relative_eq!(scale.pixel_distance(3.0, 1.0), 100.0);
}

#[test]
fn domain_rejects_reversed_and_non_finite_bounds() {
    assert!(Domain::new(2.0, 1.0).is_err());
    assert!(Domain::new(f64::NAN, 1.0).is_err());
    assert!(Domain::new(1.0, 1.0).is_ok());
}

#[test]
fn empty_accumulator_resolves_to_unit_domain() {
    let accumulator = DomainAccumulator::default();

    assert!(!accumulator.has_contributions());
    assert_eq!(accumulator.resolve(), Domain::UNIT);
}

#[test]
fn accumulator_unions_every_contribution() {
    let mut accumulator = DomainAccumulator::default();
    accumulator.add(Domain::from_values([1.0, 4.0]));
    accumulator.add(None);
    accumulator.add(Domain::from_values([-3.0, 2.0]));

    let resolved = accumulator.resolve();
    assert_eq!((resolved.min(), resolved.max()), (-3.0, 4.0));
}

#[test]
fn ticks_span_the_domain_including_endpoints() {
    let domain = Domain::new(0.0, 10.0).expect("valid domain");

    assert_eq!(tick_values(domain, 5), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    assert_eq!(linspace(1.0, 2.0, 1), vec![1.0, 2.0]);
}

#[test]
fn tick_labels_use_just_enough_decimals() {
    assert_eq!(format_tick_label(2.5, 2.5), "2.5");
    assert_eq!(format_tick_label(10.0, 2.5), "10");
    assert_eq!(format_tick_label(0.0, 2.5), "0");
    assert_eq!(format_tick_label(250.0, 50.0), "250");
}
