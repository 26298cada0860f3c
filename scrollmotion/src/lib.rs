//! Scrollmotion maps scroll position to animated visual state.
//!
//! A tracked section resolves two edges against its placement and the viewport into a
//! [`ScrollRange`]. Scroll position inside that range becomes a clamped [`Progress`], and each
//! configured [`Channel`] maps progress through a piecewise-linear keyframe [`Curve`] to an output
//! value. [`ChannelSet::compose`] evaluates every channel into an [`OutputSnapshot`] that a
//! [`Presenter`] applies.
//!
//! - Build curves and channels in code, or load a [`Scene`] from JSON
//! - Mount sections on a [`TickSource`] (for example the in-crate [`FrameLoop`]) as
//!   [`TrackedRegion`]s
//! - Present snapshots once per frame, only when they change
//!
//! Everything is single-threaded and allocation-light on the per-tick path. Configuration errors
//! surface as [`MotionError`] at construction; sampling a validated curve never fails.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compose;
mod foundation;
mod scene;
mod scroll;
mod tick;

pub use crate::foundation::core::{Progress, Rect, Size, Viewport};
pub use crate::foundation::error::{MotionError, MotionResult};

pub use crate::animation::curve::{Curve, Keyframe, Lerp};
pub use crate::animation::ease::Ease;
pub use crate::animation::length::{Length, Unit};
pub use crate::animation::ops::{stagger, staggered};
pub use crate::animation::tween::{Transition, Tween};

pub use crate::compose::channel::{Channel, ChannelCurve, ChannelSet, Property};
pub use crate::compose::fingerprint::SnapshotFingerprint;
pub use crate::compose::responsive::{Responsive, Variant};
pub use crate::compose::snapshot::{OutputSnapshot, Value};

pub use crate::scroll::in_view::{InView, InViewOpts};
pub use crate::scroll::offset::{Anchor, Edge, ScrollOffset};
pub use crate::scroll::range::{RegionLayout, ScrollRange};
pub use crate::scroll::section::SectionSpec;
pub use crate::scroll::smooth::{SmoothScroll, SmoothScrollOpts};
pub use crate::scroll::threshold::{Crossing, ThresholdToggle, ThresholdWatch, ToggleChannel};
pub use crate::scroll::tracker::{LiveProgress, Presenter, TrackedRegion};

pub use crate::tick::frame_loop::FrameLoop;
pub use crate::tick::source::{
    ListenerRegistry, Subscription, Tick, TickKind, TickListener, TickSource,
};

pub use crate::scene::document::{Scene, SectionSample};
