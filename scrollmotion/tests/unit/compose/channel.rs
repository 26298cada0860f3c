use super::*;

fn opacity(name: &str, points: &[f64], values: &[f64]) -> Channel {
    Channel::new(
        name,
        Property::Opacity,
        Curve::from_points(points, values.iter().copied()).unwrap(),
    )
    .unwrap()
}

#[test]
fn property_kind_is_enforced() {
    let numeric = Curve::from_points(&[0.0, 1.0], [0.0, 1.0]).unwrap();
    let lengths = Curve::from_points(&[0.0, 1.0], [Length::vh(50.0), Length::vh(0.0)]).unwrap();
    assert!(Channel::new("y", Property::TranslateY, numeric.clone()).is_err());
    assert!(Channel::new("o", Property::Opacity, lengths.clone()).is_err());
    assert!(Channel::new("y", Property::TranslateY, lengths).is_ok());
    assert!(Channel::new("s", Property::Scale, numeric.clone()).is_ok());
    assert!(Channel::new("", Property::Scale, numeric).is_err());
}

#[test]
fn opacity_and_blur_ranges_are_enforced() {
    let too_bright = Curve::from_points(&[0.0, 1.0], [0.0, 1.5]).unwrap();
    assert!(Channel::new("o", Property::Opacity, too_bright).is_err());
    let negative_blur = Curve::from_points(&[0.0, 1.0], [Length::px(4.0), Length::px(-1.0)]).unwrap();
    assert!(Channel::new("b", Property::Blur, negative_blur).is_err());
}

#[test]
fn duplicate_names_are_rejected() {
    let set = ChannelSet::new().with(opacity("a", &[0.0, 1.0], &[0.0, 1.0])).unwrap();
    assert!(set.with(opacity("a", &[0.0], &[1.0])).is_err());
}

#[test]
fn compose_samples_every_channel_independently() {
    let set = ChannelSet::from_channels([
        opacity("titleOpacity", &[0.0, 0.15, 0.6, 0.75], &[0.0, 1.0, 1.0, 0.0]),
        opacity("descOpacity", &[0.15, 0.3, 0.6, 0.75], &[0.0, 1.0, 1.0, 0.0]),
        Channel::new(
            "titleY",
            Property::TranslateY,
            Curve::from_points(
                &[0.0, 0.4, 0.7],
                [Length::vh(50.0), Length::vh(0.0), Length::vh(-120.0)],
            )
            .unwrap(),
        )
        .unwrap(),
    ])
    .unwrap();

    let snap = set.compose(Progress::new(0.2));
    assert_eq!(snap.len(), 3);
    assert_eq!(snap.number("titleOpacity"), Some(1.0));
    let desc = snap.number("descOpacity").unwrap();
    assert!((desc - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(snap.length("titleY"), Some(Length::vh(25.0)));

    // each channel equals its standalone sample
    for (name, _, v) in snap.iter() {
        assert_eq!(set.get(name).unwrap().sample(Progress::new(0.2)), v);
    }
}

#[test]
fn compose_into_reuses_and_overwrites() {
    let set = ChannelSet::from_channels([opacity("o", &[0.0, 1.0], &[0.0, 1.0])]).unwrap();
    let mut snap = set.compose(Progress::new(0.25));
    set.compose_into(Progress::new(0.75), &mut snap);
    assert_eq!(snap.progress(), Progress::new(0.75));
    assert_eq!(snap.number("o"), Some(0.75));
    assert_eq!(snap, set.compose(Progress::new(0.75)));
}

#[test]
fn empty_set_composes_empty_snapshot() {
    let snap = ChannelSet::new().compose(Progress::END);
    assert!(snap.is_empty());
    assert_eq!(snap.progress(), Progress::END);
}
