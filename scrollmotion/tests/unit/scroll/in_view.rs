use super::*;

fn region() -> RegionLayout {
    // 400px tall, starting one viewport (900px) down
    RegionLayout::px(900.0, 400.0).unwrap()
}

#[test]
fn enters_and_leaves_without_once() {
    let vp = Viewport::default();
    let mut v = InView::new(region(), InViewOpts::default()).unwrap();
    assert_eq!(v.observe(0.0, vp), None);
    assert_eq!(v.observe(10.0, vp), Some(true));
    assert_eq!(v.observe(200.0, vp), None);
    assert_eq!(v.observe(1300.0, vp), Some(false));
    assert_eq!(v.observe(500.0, vp), Some(true));
}

#[test]
fn once_latches_after_first_entry() {
    let vp = Viewport::default();
    let opts = InViewOpts {
        amount: 0.0,
        once: true,
    };
    let mut v = InView::new(region(), opts).unwrap();
    assert_eq!(v.observe(100.0, vp), Some(true));
    assert_eq!(v.observe(5000.0, vp), None);
    assert_eq!(v.observe(100.0, vp), None);
    assert!(v.is_in_view());
}

#[test]
fn amount_requires_that_fraction_visible() {
    let vp = Viewport::default();
    let opts = InViewOpts {
        amount: 0.5,
        once: false,
    };
    let mut v = InView::new(region(), opts).unwrap();
    // 100 of 400px visible
    assert_eq!(v.visible_fraction(100.0, vp), 0.25);
    assert_eq!(v.observe(100.0, vp), None);
    assert_eq!(v.observe(200.0, vp), Some(true));
}

#[test]
fn amount_outside_unit_range_is_rejected() {
    let opts = InViewOpts {
        amount: 1.5,
        once: false,
    };
    assert!(InView::new(region(), opts).is_err());
}
