use super::*;

fn vp() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

#[test]
fn anchors_parse_keywords_fractions_and_pixels() {
    assert_eq!("start".parse::<Anchor>().unwrap(), Anchor::Start);
    assert_eq!("center".parse::<Anchor>().unwrap(), Anchor::Center);
    assert_eq!("end".parse::<Anchor>().unwrap(), Anchor::End);
    assert_eq!("0.25".parse::<Anchor>().unwrap(), Anchor::Fraction(0.25));
    assert_eq!("50%".parse::<Anchor>().unwrap(), Anchor::Fraction(0.5));
    assert_eq!("120px".parse::<Anchor>().unwrap(), Anchor::Px(120.0));
    assert!("middle".parse::<Anchor>().is_err());
    assert!("NaN".parse::<Anchor>().is_err());
}

#[test]
fn edges_parse_one_or_two_anchors() {
    let e: Edge = "start end".parse().unwrap();
    assert_eq!(e, Edge::new(Anchor::Start, Anchor::End));
    let e: Edge = "center".parse().unwrap();
    assert_eq!(e, Edge::new(Anchor::Center, Anchor::Center));
    assert!("start end start".parse::<Edge>().is_err());
    assert!("".parse::<Edge>().is_err());
    assert_eq!(Edge::new(Anchor::End, Anchor::Px(10.0)).to_string(), "end 10px");
}

#[test]
fn enter_to_exit_spans_region_plus_viewport() {
    // 200vh region starting one screen down
    let bounds = Rect::new(0.0, 900.0, 1440.0, 2700.0);
    let r = ScrollOffset::ENTER_TO_EXIT.resolve(bounds, vp());
    assert_eq!(r.start, 0.0);
    assert_eq!(r.end, 2700.0);
    assert_eq!(r.span(), 2700.0);
}

#[test]
fn pinned_spans_region_minus_viewport() {
    let bounds = Rect::new(0.0, 900.0, 1440.0, 900.0 + 4050.0);
    let r = ScrollOffset::PINNED.resolve(bounds, vp());
    assert_eq!(r.start, 900.0);
    assert_eq!(r.end, 900.0 + 4050.0 - 900.0);
    assert_eq!(ScrollOffset::default(), ScrollOffset::PINNED);
}

#[test]
fn parse_pair_matches_constants() {
    assert_eq!(
        ScrollOffset::parse("start end", "end start").unwrap(),
        ScrollOffset::ENTER_TO_EXIT
    );
    assert_eq!(
        ScrollOffset::parse("start start", "end end").unwrap(),
        ScrollOffset::PINNED
    );
    assert!(ScrollOffset::parse("start end", "bogus").is_err());
}

#[test]
fn fractional_and_pixel_anchors_resolve() {
    let bounds = Rect::new(0.0, 1000.0, 1440.0, 2000.0);
    let e = Edge::new(Anchor::Fraction(0.5), Anchor::Px(100.0));
    assert_eq!(e.scroll_position(bounds, vp()), 1000.0 + 500.0 - 100.0);
}
