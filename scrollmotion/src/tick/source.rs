use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::foundation::core::Viewport;

/// What caused a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickKind {
    /// The scroll position changed.
    Scroll,
    /// The viewport was resized.
    Resize,
    /// The host is about to paint a frame.
    Frame,
}

/// A host event, carrying the host's latest scroll and viewport state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Tick {
    /// Cause of the tick.
    pub kind: TickKind,
    /// Document scroll position in pixels.
    pub scroll_y: f64,
    /// Current viewport.
    pub viewport: Viewport,
    /// Host clock in milliseconds.
    pub time_ms: f64,
}

/// Receiver of ticks.
pub trait TickListener {
    /// Handle one tick. Called synchronously on the host's event loop.
    fn on_tick(&self, tick: &Tick);
}

/// A source of scroll, resize and frame ticks.
///
/// Implementations hold listeners weakly: a listener that has been dropped is never called, even
/// if its [`Subscription`] is leaked.
pub trait TickSource {
    /// Register `listener` until the returned subscription is dropped.
    fn subscribe(&self, listener: Weak<dyn TickListener>) -> Subscription;

    /// The most recent host state, as a tick of kind [`TickKind::Scroll`].
    fn latest(&self) -> Tick;
}

/// Scoped registration with a [`TickSource`]. Dropping it deregisters the listener.
#[must_use = "dropping a Subscription immediately deregisters the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Subscription that runs `release` when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Deregister now.
    pub fn release(mut self) {
        if let Some(f) = self.release.take() {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.release.take() {
            f();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[derive(Default)]
struct RegistryState {
    next_id: u64,
    entries: Vec<(u64, Weak<dyn TickListener>)>,
}

/// Listener bookkeeping shared by tick source implementations.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl ListenerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; the subscription removes it again.
    pub fn subscribe(&self, listener: Weak<dyn TickListener>) -> Subscription {
        let id = {
            let mut st = self.state.borrow_mut();
            let id = st.next_id;
            st.next_id += 1;
            st.entries.push((id, listener));
            id
        };
        let weak_state = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak_state.upgrade() {
                state.borrow_mut().entries.retain(|(eid, _)| *eid != id);
            }
        })
    }

    /// Number of registered listeners that are still alive.
    pub fn live_count(&self) -> usize {
        self.state
            .borrow()
            .entries
            .iter()
            .filter(|(_, l)| l.strong_count() > 0)
            .count()
    }

    /// Deliver `tick` to every live listener in registration order.
    ///
    /// The listener list is copied out before any listener runs, so listeners may subscribe or
    /// unsubscribe during dispatch. Dead entries are pruned.
    pub fn dispatch(&self, tick: &Tick) {
        let live: SmallVec<[Rc<dyn TickListener>; 8]> = {
            let mut st = self.state.borrow_mut();
            st.entries.retain(|(_, l)| l.strong_count() > 0);
            st.entries.iter().filter_map(|(_, l)| l.upgrade()).collect()
        };
        for l in live {
            l.on_tick(tick);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tick/source.rs"]
mod tests;
