use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutSine,
    Ease::OutExpo,
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?}");
    }
}

#[test]
fn eases_are_monotonic_and_bounded() {
    for e in ALL {
        let mut prev = 0.0;
        for i in 0..=200 {
            let v = e.apply(f64::from(i) / 200.0);
            assert!(v >= prev - 1e-12, "{e:?} decreased at {i}");
            assert!((0.0..=1.0 + 1e-12).contains(&v), "{e:?} out of range at {i}");
            prev = v;
        }
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::InQuad.apply(2.0), 1.0);
}

#[test]
fn serde_uses_snake_case() {
    let e: Ease = serde_json::from_str("\"in_out_cubic\"").unwrap();
    assert_eq!(e, Ease::InOutCubic);
    assert_eq!(serde_json::to_string(&Ease::OutExpo).unwrap(), "\"out_expo\"");
}
