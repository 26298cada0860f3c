use crate::{
    foundation::core::Viewport,
    foundation::error::{MotionError, MotionResult},
    foundation::math::overlap,
    scroll::range::RegionLayout,
};

/// Options for [`InView`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InViewOpts {
    /// Fraction of the region that must be visible, in `[0, 1]`. `0` means any pixel.
    pub amount: f64,
    /// Latch after the first entry.
    pub once: bool,
}

impl Default for InViewOpts {
    fn default() -> Self {
        Self {
            amount: 0.0,
            once: false,
        }
    }
}

/// Reveal-on-enter state of one region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InView {
    layout: RegionLayout,
    opts: InViewOpts,
    visible: bool,
    latched: bool,
}

impl InView {
    /// Watch a region; starts out of view.
    pub fn new(layout: RegionLayout, opts: InViewOpts) -> MotionResult<Self> {
        if !(opts.amount.is_finite() && (0.0..=1.0).contains(&opts.amount)) {
            return Err(MotionError::validation("in-view amount must be within [0, 1]"));
        }
        Ok(Self {
            layout,
            opts,
            visible: false,
            latched: false,
        })
    }

    /// Current state.
    pub fn is_in_view(&self) -> bool {
        self.visible
    }

    /// Fraction of the region inside the viewport at `scroll_y`.
    pub fn visible_fraction(&self, scroll_y: f64, viewport: Viewport) -> f64 {
        let bounds = self.layout.resolve(viewport);
        let height = bounds.height();
        if height <= 0.0 {
            let inside = bounds.y0 >= scroll_y && bounds.y0 <= scroll_y + viewport.height;
            return if inside { 1.0 } else { 0.0 };
        }
        overlap(bounds.y0, bounds.y1, scroll_y, scroll_y + viewport.height) / height
    }

    /// Feed a scroll position. Returns the new state when it changed.
    pub fn observe(&mut self, scroll_y: f64, viewport: Viewport) -> Option<bool> {
        if self.latched || !scroll_y.is_finite() {
            return None;
        }
        let f = self.visible_fraction(scroll_y, viewport);
        let visible = if self.opts.amount <= 0.0 {
            f > 0.0
        } else {
            f >= self.opts.amount
        };
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        if visible && self.opts.once {
            self.latched = true;
        }
        tracing::trace!(visible, fraction = f, "in-view changed");
        Some(visible)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/in_view.rs"]
mod tests;
