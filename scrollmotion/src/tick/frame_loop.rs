use std::rc::Weak;

use crate::{
    foundation::core::Viewport,
    foundation::error::MotionResult,
    scroll::smooth::{SmoothScroll, SmoothScrollOpts},
    tick::source::{ListenerRegistry, Subscription, Tick, TickKind, TickListener, TickSource},
};

/// Single-threaded tick source driven directly by the host.
///
/// Without smoothing, [`FrameLoop::scroll_to`] dispatches a scroll tick immediately. With
/// smoothing, input only moves the smoother's target and [`FrameLoop::frame`] emits the scroll tick
/// for the eased position before the frame tick.
pub struct FrameLoop {
    registry: ListenerRegistry,
    scroll_y: f64,
    viewport: Viewport,
    time_ms: f64,
    smooth: Option<SmoothScroll>,
}

impl FrameLoop {
    /// Loop at scroll position `0` with `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            registry: ListenerRegistry::new(),
            scroll_y: 0.0,
            viewport,
            time_ms: 0.0,
            smooth: None,
        }
    }

    /// Loop whose scroll input is eased by a [`SmoothScroll`] limited to `limit` pixels.
    pub fn with_smoothing(
        viewport: Viewport,
        opts: SmoothScrollOpts,
        limit: f64,
    ) -> MotionResult<Self> {
        let mut this = Self::new(viewport);
        this.smooth = Some(SmoothScroll::new(opts, limit)?);
        Ok(this)
    }

    /// Current document scroll position, as last dispatched.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Host clock as of the last frame.
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    /// The smoother, when enabled.
    pub fn smoothing(&self) -> Option<&SmoothScroll> {
        self.smooth.as_ref()
    }

    /// Update the smoother's scroll limit (document height minus viewport height).
    pub fn set_scroll_limit(&mut self, limit: f64) {
        if let Some(s) = self.smooth.as_mut() {
            s.set_limit(limit);
        }
    }

    /// Live listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.live_count()
    }

    fn tick(&self, kind: TickKind) -> Tick {
        Tick {
            kind,
            scroll_y: self.scroll_y,
            viewport: self.viewport,
            time_ms: self.time_ms,
        }
    }

    fn emit(&self, kind: TickKind) {
        let tick = self.tick(kind);
        tracing::trace!(?kind, scroll_y = tick.scroll_y, "dispatch tick");
        self.registry.dispatch(&tick);
    }

    /// Scroll to `y`. Non-finite positions are ignored.
    pub fn scroll_to(&mut self, y: f64) {
        if !y.is_finite() {
            return;
        }
        match self.smooth.as_mut() {
            Some(s) => s.scroll_to(y, self.time_ms),
            None => {
                self.scroll_y = y;
                self.emit(TickKind::Scroll);
            }
        }
    }

    /// Scroll by a wheel delta.
    pub fn wheel(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        match self.smooth.as_mut() {
            Some(s) => s.wheel(delta, self.time_ms),
            None => self.scroll_to(self.scroll_y + delta),
        }
    }

    /// Scroll by a touch delta.
    pub fn touch(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        match self.smooth.as_mut() {
            Some(s) => s.touch(delta, self.time_ms),
            None => self.scroll_to(self.scroll_y + delta),
        }
    }

    /// Resize the viewport and dispatch a resize tick.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.emit(TickKind::Resize);
    }

    /// Advance the clock to `time_ms` and dispatch a frame tick.
    ///
    /// Time never runs backwards; an earlier `time_ms` reuses the last clock value.
    pub fn frame(&mut self, time_ms: f64) {
        if time_ms.is_finite() && time_ms > self.time_ms {
            self.time_ms = time_ms;
        }
        if let Some(s) = self.smooth.as_mut() {
            let y = s.advance(self.time_ms);
            if y != self.scroll_y {
                self.scroll_y = y;
                self.emit(TickKind::Scroll);
            }
        }
        self.emit(TickKind::Frame);
    }
}

impl TickSource for FrameLoop {
    fn subscribe(&self, listener: Weak<dyn TickListener>) -> Subscription {
        self.registry.subscribe(listener)
    }

    fn latest(&self) -> Tick {
        self.tick(TickKind::Scroll)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tick/frame_loop.rs"]
mod tests;
