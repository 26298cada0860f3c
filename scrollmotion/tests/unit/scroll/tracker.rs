use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::animation::curve::Curve;
use crate::compose::channel::{Channel, ChannelSet, Property};
use crate::tick::frame_loop::FrameLoop;

fn fade_set() -> ChannelSet {
    ChannelSet::from_channels([Channel::new(
        "opacity",
        Property::Opacity,
        Curve::from_points(&[0.0, 0.15, 0.6, 0.75], [0.0, 1.0, 1.0, 0.0]).unwrap(),
    )
    .unwrap()])
    .unwrap()
}

fn pinned_spec() -> SectionSpec {
    // 1900px tall at the document top; pinned progress spans 1000px of scroll
    SectionSpec::new(
        "pinned",
        RegionLayout::px(0.0, 1900.0).unwrap(),
        ScrollOffset::PINNED,
        fade_set(),
    )
    .unwrap()
}

type Seen = Rc<RefCell<Vec<Option<f64>>>>;

fn recorder() -> (Seen, impl FnMut(&OutputSnapshot) + 'static) {
    let seen: Seen = Rc::default();
    let sink = Rc::clone(&seen);
    (seen, move |s: &OutputSnapshot| {
        sink.borrow_mut().push(s.number("opacity"))
    })
}

#[test]
fn mount_seeds_progress_from_source() {
    let mut fl = FrameLoop::new(Viewport::default());
    fl.scroll_to(500.0);
    let (_seen, present) = recorder();
    let region = TrackedRegion::mount(&fl, pinned_spec(), present);
    assert_eq!(region.range(), ScrollRange::between(0.0, 1000.0));
    assert_eq!(region.progress(), Progress::new(0.5));
    assert_eq!(region.id(), "pinned");
    assert_eq!(fl.listener_count(), 1);
}

#[test]
fn scroll_updates_progress_and_frame_presents_once() {
    let mut fl = FrameLoop::new(Viewport::default());
    let (seen, present) = recorder();
    let region = TrackedRegion::mount(&fl, pinned_spec(), present);

    fl.scroll_to(150.0);
    assert_eq!(region.progress(), Progress::new(0.15));
    assert!(seen.borrow().is_empty());

    fl.frame(16.0);
    assert_eq!(*seen.borrow(), vec![Some(1.0)]);

    // no scroll since last frame
    fl.frame(32.0);
    assert_eq!(seen.borrow().len(), 1);

    // several scrolls within one frame present only the latest
    fl.scroll_to(700.0);
    fl.scroll_to(750.0);
    fl.frame(48.0);
    assert_eq!(*seen.borrow(), vec![Some(1.0), Some(0.0)]);
}

#[test]
fn unchanged_values_are_not_presented_again() {
    let mut fl = FrameLoop::new(Viewport::default());
    let (seen, present) = recorder();
    let _region = TrackedRegion::mount(&fl, pinned_spec(), present);

    fl.scroll_to(300.0);
    fl.frame(16.0);
    // still on the opacity plateau
    fl.scroll_to(400.0);
    fl.frame(32.0);
    assert_eq!(*seen.borrow(), vec![Some(1.0)]);
}

#[test]
fn overscroll_clamps_progress() {
    let mut fl = FrameLoop::new(Viewport::default());
    let (_seen, present) = recorder();
    let region = TrackedRegion::mount(&fl, pinned_spec(), present);
    fl.scroll_to(-300.0);
    assert_eq!(region.progress(), Progress::START);
    fl.scroll_to(10_000.0);
    assert_eq!(region.progress(), Progress::END);
    assert_eq!(region.snapshot().number("opacity"), Some(0.0));
}

#[test]
fn unmount_with_pending_update_is_a_no_op() {
    let mut fl = FrameLoop::new(Viewport::default());
    let (seen, present) = recorder();
    let region = TrackedRegion::mount(&fl, pinned_spec(), present);
    let live = region.live();

    fl.scroll_to(150.0);
    assert_eq!(live.get(), Some(Progress::new(0.15)));
    region.unmount();

    fl.frame(16.0);
    fl.scroll_to(700.0);
    fl.frame(32.0);
    assert!(seen.borrow().is_empty());
    assert_eq!(live.get(), None);
    assert_eq!(fl.listener_count(), 0);
}

#[test]
fn resize_recomputes_range_from_viewport_lengths() {
    use crate::animation::length::Length;

    let mut fl = FrameLoop::new(Viewport::default());
    let spec = SectionSpec::new(
        "blur",
        RegionLayout::new(Length::vh(100.0), Length::vh(450.0)).unwrap(),
        ScrollOffset::PINNED,
        fade_set(),
    )
    .unwrap();
    let (_seen, present) = recorder();
    let region = TrackedRegion::mount(&fl, spec, present);
    assert_eq!(region.range(), ScrollRange::between(900.0, 900.0 + 3150.0));

    fl.resize(Viewport::new(390.0, 800.0).unwrap());
    assert_eq!(region.range(), ScrollRange::between(800.0, 800.0 + 2800.0));
}

#[test]
fn relayout_uses_measured_bounds() {
    let mut fl = FrameLoop::new(Viewport::default());
    fl.scroll_to(1000.0);
    let (_seen, present) = recorder();
    let region = TrackedRegion::mount(&fl, pinned_spec(), present);
    assert_eq!(region.progress(), Progress::END);

    region.relayout(Rect::new(0.0, 500.0, 1440.0, 2400.0));
    assert_eq!(region.range(), ScrollRange::between(500.0, 1500.0));
    assert_eq!(region.progress(), Progress::new(0.5));

    fl.resize(Viewport::new(1440.0, 1000.0).unwrap());
    assert_eq!(region.range(), ScrollRange::between(500.0, 1400.0));
}

#[test]
fn responsive_variant_follows_viewport_width() {
    let mobile = ChannelSet::from_channels([Channel::new(
        "opacity",
        Property::Opacity,
        Curve::from_points(&[0.0, 0.02, 0.1, 0.25], [0.0, 1.0, 1.0, 0.0]).unwrap(),
    )
    .unwrap()])
    .unwrap();
    let channels = Responsive::new(fade_set()).variant(767.0, mobile).unwrap();
    let mut fl = FrameLoop::new(Viewport::default());
    let (_seen, present) = recorder();
    let region = TrackedRegion::track(
        &fl,
        "blur",
        RegionLayout::px(0.0, 1900.0).unwrap(),
        ScrollOffset::PINNED,
        channels,
        present,
    )
    .unwrap();

    fl.scroll_to(300.0);
    assert_eq!(region.snapshot().number("opacity"), Some(1.0));
    fl.resize(Viewport::new(390.0, 900.0).unwrap());
    assert_eq!(region.snapshot().number("opacity"), Some(0.0));
}

#[test]
fn dropping_region_deregisters() {
    let fl = FrameLoop::new(Viewport::default());
    let (_seen, present) = recorder();
    let region = TrackedRegion::mount(&fl, pinned_spec(), present);
    assert!(region.is_mounted());
    drop(region);
    assert_eq!(fl.listener_count(), 0);
}

type RegionSlot = Rc<RefCell<Option<TrackedRegion>>>;

#[test]
fn presenter_can_read_its_own_region() {
    let mut fl = FrameLoop::new(Viewport::default());
    let slot: RegionSlot = Rc::default();
    let seen: Rc<RefCell<Vec<(ScrollRange, Option<f64>, String)>>> = Rc::default();

    let handle = Rc::clone(&slot);
    let sink = Rc::clone(&seen);
    let region = TrackedRegion::mount(&fl, pinned_spec(), move |_: &OutputSnapshot| {
        if let Some(r) = handle.borrow().as_ref() {
            sink.borrow_mut()
                .push((r.range(), r.snapshot().number("opacity"), r.id()));
            assert_eq!(r.progress(), Progress::new(0.3));
        }
    });
    *slot.borrow_mut() = Some(region);

    fl.scroll_to(300.0);
    fl.frame(16.0);
    assert_eq!(
        *seen.borrow(),
        vec![(ScrollRange::between(0.0, 1000.0), Some(1.0), "pinned".to_owned())]
    );
    slot.borrow_mut().take();
}

#[test]
fn relayout_from_presenter_is_presented_next_frame() {
    let mut fl = FrameLoop::new(Viewport::default());
    let slot: RegionSlot = Rc::default();
    let seen: Seen = Rc::default();
    let moved = Rc::new(Cell::new(false));

    let handle = Rc::clone(&slot);
    let sink = Rc::clone(&seen);
    let once = Rc::clone(&moved);
    let region = TrackedRegion::mount(&fl, pinned_spec(), move |s: &OutputSnapshot| {
        sink.borrow_mut().push(s.number("opacity"));
        if !once.replace(true)
            && let Some(r) = handle.borrow().as_ref()
        {
            r.relayout(Rect::new(0.0, 500.0, 1440.0, 2400.0));
        }
    });
    *slot.borrow_mut() = Some(region);

    fl.scroll_to(300.0);
    fl.frame(16.0);
    // the section moved below the scroll position: progress drops back to 0
    assert_eq!(
        slot.borrow().as_ref().map(|r| r.range()),
        Some(ScrollRange::between(500.0, 1500.0))
    );
    fl.frame(32.0);
    fl.scroll_to(1000.0);
    fl.frame(48.0);
    assert_eq!(*seen.borrow(), vec![Some(1.0), Some(0.0), Some(1.0)]);
    slot.borrow_mut().take();
}

#[test]
fn presenter_can_unmount_its_own_region() {
    let mut fl = FrameLoop::new(Viewport::default());
    let slot: RegionSlot = Rc::default();
    let seen: Seen = Rc::default();

    let handle = Rc::clone(&slot);
    let sink = Rc::clone(&seen);
    let region = TrackedRegion::mount(&fl, pinned_spec(), move |s: &OutputSnapshot| {
        sink.borrow_mut().push(s.number("opacity"));
        handle.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(region);

    fl.scroll_to(300.0);
    fl.frame(16.0);
    fl.scroll_to(700.0);
    fl.frame(32.0);
    assert_eq!(*seen.borrow(), vec![Some(1.0)]);
    assert!(slot.borrow().is_none());
    assert_eq!(fl.listener_count(), 0);
}
