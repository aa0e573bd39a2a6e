use approx::assert_relative_eq;
use nice_scale::core::{NiceScale, NiceScaleOptions, compute_nice_scale};

fn assert_scale(scale: NiceScale, nice_min: f64, nice_max: f64, tick_spacing: f64) {
    assert_relative_eq!(scale.nice_min, nice_min, epsilon = 1e-12, max_relative = 1e-12);
    assert_relative_eq!(scale.nice_max, nice_max, epsilon = 1e-12, max_relative = 1e-12);
    assert_relative_eq!(
        scale.tick_spacing,
        tick_spacing,
        epsilon = 1e-12,
        max_relative = 1e-12
    );
}

#[test]
fn small_signed_range_snaps_to_hundredths() {
    let scale = NiceScale::compute(-0.085, 0.173);
    assert_scale(scale, -0.1, 0.2, 0.05);
}

#[test]
fn explicit_bounds_are_kept() {
    let options = NiceScaleOptions::new()
        .with_max_ticks(10)
        .with_bounds(100.0, 200.0);
    let scale = compute_nice_scale(100.0, 200.0, options);
    assert_scale(scale, 100.0, 200.0, 10.0);
}

#[test]
fn mid_range_extends_to_nearest_fifty() {
    let scale = NiceScale::compute(105.0, 543.0);
    assert_scale(scale, 100.0, 550.0, 50.0);
}

#[test]
fn range_just_below_power_of_ten_rounds_up() {
    let scale = NiceScale::compute(0.0, 9999.0);
    assert_scale(scale, 0.0, 10_000.0, 1000.0);
}

#[test]
fn fewer_max_ticks_widen_spacing() {
    let options = NiceScaleOptions::new().with_max_ticks(8);
    let scale = compute_nice_scale(0.0, 3411.0, options);
    assert_scale(scale, 0.0, 4000.0, 1000.0);
}

#[test]
fn negative_range_mirrors_positive_one() {
    let scale = NiceScale::compute(-543.0, -105.0);
    assert_scale(scale, -550.0, -100.0, 50.0);
}

#[test]
fn single_override_still_derives_other_bound() {
    let options = NiceScaleOptions::new().with_min_point(90.0);
    let scale = compute_nice_scale(100.0, 200.0, options);
    assert_scale(scale, 90.0, 200.0, 20.0);
}

#[test]
fn max_ticks_below_two_is_clamped() {
    let options = NiceScaleOptions::new().with_max_ticks(1);
    let scale = compute_nice_scale(0.0, 10.0, options);
    assert_scale(scale, 0.0, 10.0, 10.0);
}

#[test]
fn equal_bounds_produce_usable_spacing() {
    let scale = NiceScale::compute(5.0, 5.0);
    assert!(scale.tick_spacing > 0.0);
    assert!(scale.nice_min <= 5.0);
    assert!(scale.nice_max >= 5.0);
    assert!(scale.nice_max > scale.nice_min);
}

#[test]
fn zero_width_range_at_origin_is_widened() {
    let scale = NiceScale::compute(0.0, 0.0);
    assert_scale(scale, 0.0, 0.1, 0.1);
}

#[test]
fn non_finite_input_propagates_nan() {
    let scale = NiceScale::compute(f64::NAN, 1.0);
    assert!(scale.nice_min.is_nan());
    assert!(scale.nice_max.is_nan());
    assert!(scale.tick_spacing.is_nan());

    let scale = NiceScale::compute(0.0, f64::INFINITY);
    assert!(scale.tick_spacing.is_nan());
}

#[test]
fn repeated_calls_are_identical() {
    let first = NiceScale::compute(-12.5, 87.25);
    let second = NiceScale::compute(-12.5, 87.25);
    assert_eq!(first, second);
}

#[test]
fn scale_contains_data_extent() {
    let scale = NiceScale::compute(3.2, 47.9);
    assert!(scale.contains(3.2));
    assert!(scale.contains(47.9));
    assert!(!scale.contains(scale.nice_max + scale.tick_spacing));
    assert_relative_eq!(scale.span(), scale.nice_max - scale.nice_min);
}

#[test]
fn subnormal_span_keeps_positive_spacing() {
    let scale = NiceScale::compute(0.0, 1e-310);

    assert!(scale.tick_spacing.is_finite());
    assert!(scale.tick_spacing > 0.0);
    assert!(scale.nice_min <= 0.0);
    assert!(scale.nice_max >= 1e-310);
    assert!(scale.tick_count() >= 2);
}

#[test]
fn subnormal_equal_bounds_are_bracketed() {
    let scale = NiceScale::compute(1e-320, 1e-320);

    assert!(scale.tick_spacing > 0.0);
    assert!(scale.nice_min <= 1e-320);
    assert!(scale.nice_max >= 1e-320);
    assert!(scale.nice_max > scale.nice_min);
}

#[test]
fn tiny_span_spacing_stays_nice() {
    let scale = NiceScale::compute(0.0, 1e-300);

    assert_relative_eq!(scale.tick_spacing, 1e-301, max_relative = 1e-12);
    assert!(scale.nice_max >= 1e-300);
    let steps = scale.nice_max / scale.tick_spacing;
    assert!((steps - steps.round()).abs() <= 1e-9);
}

#[test]
fn span_wider_than_f64_max_is_rescaled() {
    let scale = NiceScale::compute(-1e308, 1e308);

    assert_relative_eq!(scale.nice_min, -1e308, max_relative = 1e-12);
    assert_relative_eq!(scale.nice_max, 1e308, max_relative = 1e-12);
    assert_relative_eq!(scale.tick_spacing, 2e307, max_relative = 1e-12);
    assert_eq!(scale.tick_count(), 11);
}
