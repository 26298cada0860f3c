use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Rect, Size};

/// Normalized scroll progress in `[0, 1]`.
///
/// Construction always clamps, so a `Progress` can be fed to any curve without further checks.
/// `NaN` collapses to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Progress at the start edge.
    pub const START: Self = Self(0.0);
    /// Progress at the end edge.
    pub const END: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`.
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::START;
        }
        Self(v.clamp(0.0, 1.0))
    }

    /// Raw value in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Host viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with finite, strictly positive dimensions.
    pub fn new(width: f64, height: f64) -> MotionResult<Self> {
        if !(width.is_finite() && height.is_finite()) {
            return Err(MotionError::validation("Viewport dimensions must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(MotionError::validation("Viewport dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Viewport as a [`Size`].
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
