use super::*;

#[test]
fn curve_hits_breakpoints() {
    assert_eq!(damped_ratio(0.0), 0.0);
    assert_eq!(damped_ratio(0.5), 0.5);
    assert_eq!(damped_ratio(1.0), 1.0);
    assert_eq!(damped_ratio(2.0), 1.75);
    assert_eq!(damped_ratio(3.0), 2.0);
    assert_eq!(damped_ratio(3.5), 2.0);
    assert_eq!(damped_ratio(1_000.0), 2.0);
}

#[test]
fn curve_is_continuous_at_breakpoints() {
    let eps = 1e-4;
    assert!((damped_ratio(1.0 - eps) - damped_ratio(1.0)).abs() < 1e-3);
    assert!((damped_ratio(3.0 - eps) - damped_ratio(3.0)).abs() < 1e-3);
}

#[test]
fn curve_is_non_negative_and_non_decreasing() {
    let mut previous = damped_ratio(0.0);
    for step in 1..=2_000 {
        let r = step as f32 * 0.0025;
        let y = damped_ratio(r);
        assert!(y >= 0.0);
        assert!(y + 1e-6 >= previous, "curve decreased at r={r}");
        assert!(y <= MAX_OFFSET_RATIO + 1e-6);
        previous = y;
    }
}

#[test]
fn negative_and_nan_ratios_clamp_to_zero() {
    assert_eq!(damped_ratio(-1.0), 0.0);
    assert_eq!(damped_ratio(f32::NAN), 0.0);
}

#[test]
fn offset_keeps_sign_of_drag() {
    let band = RubberBand::new(32.0).expect("valid band");
    for x in [-500.0, -96.0, -40.0, -1.0, 1.0, 40.0, 96.0, 500.0f32] {
        let offset = band.damped_offset(x);
        assert_eq!(offset.signum(), x.signum(), "x={x}");
    }
    assert_eq!(band.damped_offset(0.0), 0.0);
    assert_eq!(band.damped_offset(-0.0), 0.0);
    assert_eq!(band.offset_px(0.0), 0);
}

#[test]
fn offset_saturates_at_twice_half_max() {
    let band = RubberBand::new(32.0).expect("valid band");
    assert_eq!(band.max_visual_offset(), 64.0);
    assert_eq!(band.offset_px(16.0), 16);
    assert_eq!(band.offset_px(96.0), 64);
    assert_eq!(band.offset_px(200.0), 64);
    assert_eq!(band.offset_px(-200.0), -64);
}

#[test]
fn offset_truncates_toward_zero() {
    let band = RubberBand::new(32.0).expect("valid band");
    // r = 1.5 -> y = 1 + 0.5 - 0.0625 = 1.4375 -> 46.0
    assert_eq!(band.damped_offset(48.0), 46.0);
    assert_eq!(band.offset_px(10.9), 10);
    assert_eq!(band.offset_px(-10.9), -10);
}

#[test]
fn trigger_fires_at_three_half_offsets() {
    let band = RubberBand::new(32.0).expect("valid band");
    assert_eq!(band.trigger_distance(), 96.0);
    assert!(!band.is_past_trigger(95.9));
    assert!(band.is_past_trigger(96.0));
    assert!(band.is_past_trigger(-96.0));
}

#[test]
fn rejects_degenerate_half_offsets() {
    assert!(RubberBand::new(0.0).is_none());
    assert!(RubberBand::new(-4.0).is_none());
    assert!(RubberBand::new(f32::INFINITY).is_none());
    assert!(RubberBand::new(f32::NAN).is_none());
}
