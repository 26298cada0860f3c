use super::*;

#[test]
fn progress_is_clamped_on_overscroll() {
    let r = ScrollRange::between(100.0, 300.0);
    assert_eq!(r.progress_at(-50.0), Progress::START);
    assert_eq!(r.progress_at(100.0), Progress::START);
    assert_eq!(r.progress_at(200.0), Progress::new(0.5));
    assert_eq!(r.progress_at(300.0), Progress::END);
    assert_eq!(r.progress_at(10_000.0), Progress::END);
}

#[test]
fn progress_is_reactive_not_integrated() {
    let r = ScrollRange::between(0.0, 1000.0);
    let forward = r.progress_at(700.0);
    let _ = r.progress_at(900.0);
    assert_eq!(r.progress_at(700.0), forward);
}

#[test]
fn zero_length_range_is_a_step() {
    let r = ScrollRange::between(500.0, 500.0);
    assert_eq!(r.progress_at(499.0), Progress::START);
    assert_eq!(r.progress_at(500.0), Progress::END);
}

#[test]
fn reversed_range_runs_backwards() {
    let r = ScrollRange::between(800.0, 600.0);
    assert_eq!(r.progress_at(800.0), Progress::START);
    assert_eq!(r.progress_at(700.0), Progress::new(0.5));
    assert_eq!(r.progress_at(600.0), Progress::END);
}

#[test]
fn non_finite_input_is_safe() {
    let r = ScrollRange::between(f64::NAN, 100.0);
    assert_eq!(r.start, 0.0);
    assert_eq!(r.progress_at(f64::NAN), Progress::START);
}

#[test]
fn layout_resolves_viewport_units() {
    let vp = Viewport::new(1440.0, 900.0).unwrap();
    let l = RegionLayout::new(Length::vh(100.0), Length::vh(200.0)).unwrap();
    assert_eq!(l.resolve(vp), Rect::new(0.0, 900.0, 1440.0, 2700.0));
    assert!(!l.is_fixed());
    assert!(RegionLayout::px(10.0, 20.0).unwrap().is_fixed());
    assert!(RegionLayout::px(0.0, -1.0).is_err());
    assert!(RegionLayout::new(Length::px(f64::INFINITY), Length::px(1.0)).is_err());
}
