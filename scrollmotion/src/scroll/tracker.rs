use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::{
    compose::fingerprint::SnapshotFingerprint,
    compose::responsive::Responsive,
    compose::snapshot::OutputSnapshot,
    foundation::core::{Progress, Rect, Viewport},
    foundation::error::MotionResult,
    scroll::offset::ScrollOffset,
    scroll::range::{RegionLayout, ScrollRange},
    scroll::section::SectionSpec,
    tick::source::{Subscription, Tick, TickKind, TickListener, TickSource},
};

/// Host-side consumer of snapshots.
pub trait Presenter {
    /// Apply `snapshot` to whatever the host renders.
    fn present(&mut self, snapshot: &OutputSnapshot);
}

impl<F> Presenter for F
where
    F: FnMut(&OutputSnapshot),
{
    fn present(&mut self, snapshot: &OutputSnapshot) {
        self(snapshot)
    }
}

struct RegionState {
    spec: SectionSpec,
    measured: Option<Rect>,
    viewport: Viewport,
    scroll_y: f64,
    range: ScrollRange,
    variant: Option<usize>,
    snapshot: OutputSnapshot,
    dirty: bool,
    last_presented: Option<SnapshotFingerprint>,
}

impl RegionState {
    fn layout(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let bounds = self
            .measured
            .unwrap_or_else(|| self.spec.bounds(viewport));
        self.range = self.spec.offset().resolve(bounds, viewport);
        self.variant = self.spec.channels().select_index(viewport);
    }

    fn recompute(&mut self) -> Progress {
        let p = self.range.progress_at(self.scroll_y);
        self.spec
            .channels()
            .resolve(self.variant)
            .compose_into(p, &mut self.snapshot);
        self.dirty = true;
        p
    }

    /// Copy the snapshot into `out` if it should be presented this frame.
    fn take_presentable(&mut self, out: &mut OutputSnapshot) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        let fp = self.snapshot.fingerprint();
        if self.last_presented == Some(fp) {
            return false;
        }
        self.last_presented = Some(fp);
        out.clone_from(&self.snapshot);
        true
    }
}

/// The presenter runs outside the `state` borrow so it may call back into its own region.
struct RegionInner {
    mounted: Cell<bool>,
    progress: Cell<Progress>,
    state: RefCell<RegionState>,
    presenter: RefCell<Box<dyn Presenter>>,
    presented: RefCell<OutputSnapshot>,
}

impl RegionInner {
    fn present(&self) {
        let Ok(mut out) = self.presented.try_borrow_mut() else {
            return;
        };
        let ready = match self.state.try_borrow_mut() {
            Ok(mut st) => st.take_presentable(&mut out),
            Err(_) => false,
        };
        if !ready {
            return;
        }
        // a presenter that triggers another frame on this region is not re-entered
        if let Ok(mut presenter) = self.presenter.try_borrow_mut() {
            presenter.present(&out);
        }
    }
}

impl TickListener for RegionInner {
    fn on_tick(&self, tick: &Tick) {
        if !self.mounted.get() {
            return;
        }
        if tick.kind == TickKind::Frame {
            self.present();
            return;
        }
        let Ok(mut st) = self.state.try_borrow_mut() else {
            return;
        };
        if tick.viewport != st.viewport {
            st.layout(tick.viewport);
        }
        if tick.scroll_y.is_finite() {
            st.scroll_y = tick.scroll_y;
        }
        let p = st.recompute();
        self.progress.set(p);
        tracing::trace!(id = st.spec.id(), progress = p.get(), "region progress");
    }
}

/// Weak handle to a region's live progress.
#[derive(Clone)]
pub struct LiveProgress {
    inner: Weak<RegionInner>,
}

impl LiveProgress {
    /// Latest progress, or `None` once the region has been unmounted.
    pub fn get(&self) -> Option<Progress> {
        let inner = self.inner.upgrade()?;
        inner.mounted.get().then(|| inner.progress.get())
    }
}

impl std::fmt::Debug for LiveProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LiveProgress").field(&self.get()).finish()
    }
}

/// A mounted section: observes a [`TickSource`], keeps progress current and hands snapshots to
/// its [`Presenter`].
///
/// Progress and the snapshot are recomputed on scroll and resize ticks. The snapshot is presented
/// on the next frame tick, at most once per frame and only when its values changed. Dropping the
/// region (or calling [`TrackedRegion::unmount`]) deregisters it; anything still pending is
/// discarded.
pub struct TrackedRegion {
    inner: Rc<RegionInner>,
    subscription: Option<Subscription>,
}

impl TrackedRegion {
    /// Mount `spec` on `source`, seeding progress from the source's latest state.
    #[tracing::instrument(skip_all, fields(id = spec.id()))]
    pub fn mount<S>(source: &S, spec: SectionSpec, presenter: impl Presenter + 'static) -> Self
    where
        S: TickSource + ?Sized,
    {
        let latest = source.latest();
        let mut state = RegionState {
            spec,
            measured: None,
            viewport: latest.viewport,
            scroll_y: if latest.scroll_y.is_finite() {
                latest.scroll_y
            } else {
                0.0
            },
            range: ScrollRange::between(0.0, 0.0),
            variant: None,
            snapshot: OutputSnapshot::empty(),
            dirty: false,
            last_presented: None,
        };
        state.layout(latest.viewport);
        let progress = state.recompute();
        tracing::debug!(
            start = state.range.start,
            end = state.range.end,
            progress = progress.get(),
            "mounted region"
        );

        let inner = Rc::new(RegionInner {
            mounted: Cell::new(true),
            progress: Cell::new(progress),
            state: RefCell::new(state),
            presenter: RefCell::new(Box::new(presenter)),
            presented: RefCell::new(OutputSnapshot::empty()),
        });
        let listener: Weak<dyn TickListener> = Rc::downgrade(&inner) as Weak<dyn TickListener>;
        let subscription = source.subscribe(listener);
        Self {
            inner,
            subscription: Some(subscription),
        }
    }

    /// Track a region between two edges; shorthand for building a [`SectionSpec`] and mounting it.
    pub fn track<S>(
        source: &S,
        id: impl Into<String>,
        layout: RegionLayout,
        offset: ScrollOffset,
        channels: impl Into<Responsive>,
        presenter: impl Presenter + 'static,
    ) -> MotionResult<Self>
    where
        S: TickSource + ?Sized,
    {
        let spec = SectionSpec::new(id, layout, offset, channels)?;
        Ok(Self::mount(source, spec, presenter))
    }

    /// Latest progress.
    pub fn progress(&self) -> Progress {
        self.inner.progress.get()
    }

    /// Handle for reading progress from elsewhere without keeping the region alive.
    pub fn live(&self) -> LiveProgress {
        LiveProgress {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Copy of the latest snapshot, presented or not.
    pub fn snapshot(&self) -> OutputSnapshot {
        self.inner.state.borrow().snapshot.clone()
    }

    /// Current scroll range.
    pub fn range(&self) -> ScrollRange {
        self.inner.state.borrow().range
    }

    /// Section id.
    pub fn id(&self) -> String {
        self.inner.state.borrow().spec.id().to_owned()
    }

    /// `true` until unmounted.
    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    /// Replace the region's bounds with host-measured geometry and recompute the range.
    ///
    /// Measured bounds stay in effect across resizes until the next `relayout`.
    pub fn relayout(&self, bounds: Rect) {
        if !self.is_mounted() {
            return;
        }
        let Ok(mut st) = self.inner.state.try_borrow_mut() else {
            return;
        };
        st.measured = Some(bounds);
        let viewport = st.viewport;
        st.layout(viewport);
        let p = st.recompute();
        self.inner.progress.set(p);
        tracing::debug!(
            id = st.spec.id(),
            start = st.range.start,
            end = st.range.end,
            "relayout region"
        );
    }

    /// Stop tracking. Pending work is dropped and the presenter is never called again.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for TrackedRegion {
    fn drop(&mut self) {
        if self.inner.mounted.replace(false)
            && let Ok(st) = self.inner.state.try_borrow()
        {
            tracing::debug!(id = st.spec.id(), "unmounted region");
        }
        self.subscription.take();
    }
}

impl std::fmt::Debug for TrackedRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackedRegion")
            .field("mounted", &self.is_mounted())
            .field("progress", &self.progress())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
