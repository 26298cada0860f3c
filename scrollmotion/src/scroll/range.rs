use crate::{
    animation::length::{Length, Unit},
    foundation::core::{Progress, Rect, Viewport},
    foundation::error::{MotionError, MotionResult},
    foundation::math::inverse_lerp,
};

/// Document scroll positions at which progress is `0` and `1`.
///
/// A range may run backwards (`end < start`) when a short region is pinned; progress then falls
/// as the page scrolls down. A zero-length range is a step at `start`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollRange {
    /// Scroll position of progress `0`.
    pub start: f64,
    /// Scroll position of progress `1`.
    pub end: f64,
}

impl ScrollRange {
    /// Range between two scroll positions. Non-finite bounds collapse to `0`.
    pub fn between(start: f64, end: f64) -> Self {
        let fix = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            start: fix(start),
            end: fix(end),
        }
    }

    /// Scroll distance covered by the range.
    pub fn span(self) -> f64 {
        (self.end - self.start).abs()
    }

    /// Progress at document scroll position `scroll_y`, clamped to `[0, 1]`.
    pub fn progress_at(self, scroll_y: f64) -> Progress {
        if !scroll_y.is_finite() {
            return Progress::START;
        }
        let t = if self.end >= self.start {
            inverse_lerp(self.start, self.end, scroll_y)
        } else {
            1.0 - inverse_lerp(self.end, self.start, scroll_y)
        };
        Progress::new(t)
    }
}

/// Vertical placement of a tracked region in the document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionLayout {
    /// Distance from the document top to the region's top edge.
    pub top: Length,
    /// Region height; must not be negative.
    pub height: Length,
}

impl RegionLayout {
    /// Validated layout. Lengths must be px, vh, vw, % or unitless (px).
    pub fn new(top: Length, height: Length) -> MotionResult<Self> {
        for (what, l) in [("top", top), ("height", height)] {
            if !l.value.is_finite() {
                return Err(MotionError::validation(format!(
                    "region {what} must be finite"
                )));
            }
        }
        if height.value < 0.0 {
            return Err(MotionError::validation("region height must be >= 0"));
        }
        Ok(Self { top, height })
    }

    /// Layout measured in pixels.
    pub fn px(top: f64, height: f64) -> MotionResult<Self> {
        Self::new(Length::px(top), Length::px(height))
    }

    /// Region bounds in document pixels for `viewport`.
    pub fn resolve(self, viewport: Viewport) -> Rect {
        let top = self.top.resolve_px(viewport);
        let height = self.height.resolve_px(viewport).max(0.0);
        Rect::new(0.0, top, viewport.width, top + height)
    }

    /// `true` when both lengths are fixed pixels and do not follow the viewport.
    pub fn is_fixed(self) -> bool {
        matches!(self.top.unit, Unit::Px | Unit::None)
            && matches!(self.height.unit, Unit::Px | Unit::None)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/range.rs"]
mod tests;
