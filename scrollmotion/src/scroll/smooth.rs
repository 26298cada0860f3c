use crate::{
    animation::ease::Ease,
    foundation::error::{MotionError, MotionResult},
};

/// Options for [`SmoothScroll`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothScrollOpts {
    /// Time to reach a new target, in seconds.
    pub duration_secs: f64,
    /// Easing over the duration. `None` uses `min(1, 1.001 - 2^(-10 t))`.
    pub ease: Option<Ease>,
    /// Factor applied to wheel deltas.
    pub wheel_multiplier: f64,
    /// Factor applied to touch deltas.
    pub touch_multiplier: f64,
    /// When `false`, targets are clamped to `[0, limit]`.
    pub infinite: bool,
}

impl Default for SmoothScrollOpts {
    fn default() -> Self {
        Self {
            duration_secs: 1.2,
            ease: None,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            infinite: false,
        }
    }
}

impl SmoothScrollOpts {
    /// Check durations and multipliers.
    pub fn validate(&self) -> MotionResult<()> {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(MotionError::validation(
                "smooth scroll duration must be finite and > 0",
            ));
        }
        for (what, m) in [
            ("wheel_multiplier", self.wheel_multiplier),
            ("touch_multiplier", self.touch_multiplier),
        ] {
            if !m.is_finite() {
                return Err(MotionError::validation(format!("{what} must be finite")));
            }
        }
        Ok(())
    }
}

fn default_ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Eases the displayed scroll position toward the latest input target.
///
/// This smooths the *input* to progress tracking; progress itself stays a pure function of the
/// position this produces.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    opts: SmoothScrollOpts,
    limit: f64,
    from: f64,
    to: f64,
    current: f64,
    start_ms: f64,
    animating: bool,
}

impl SmoothScroll {
    /// Smoother resting at `0`, scrollable up to `limit` pixels.
    pub fn new(opts: SmoothScrollOpts, limit: f64) -> MotionResult<Self> {
        opts.validate()?;
        if !(limit.is_finite() && limit >= 0.0) {
            return Err(MotionError::validation(
                "smooth scroll limit must be finite and >= 0",
            ));
        }
        Ok(Self {
            opts,
            limit,
            from: 0.0,
            to: 0.0,
            current: 0.0,
            start_ms: 0.0,
            animating: false,
        })
    }

    /// Options in use.
    pub fn opts(&self) -> &SmoothScrollOpts {
        &self.opts
    }

    /// Maximum scroll position (document height minus viewport height).
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Change the limit, e.g. after a resize. Clamps the target and position.
    pub fn set_limit(&mut self, limit: f64) {
        if !(limit.is_finite() && limit >= 0.0) {
            return;
        }
        self.limit = limit;
        if !self.opts.infinite {
            self.to = self.to.clamp(0.0, limit);
            self.current = self.current.clamp(0.0, limit);
            self.from = self.from.clamp(0.0, limit);
        }
    }

    fn clamp_target(&self, y: f64) -> f64 {
        if self.opts.infinite {
            y
        } else {
            y.clamp(0.0, self.limit)
        }
    }

    /// Animate toward `target` from the current position.
    pub fn scroll_to(&mut self, target: f64, now_ms: f64) {
        if !target.is_finite() {
            return;
        }
        let target = self.clamp_target(target);
        self.advance(now_ms);
        self.from = self.current;
        self.to = target;
        self.start_ms = now_ms;
        self.animating = self.to != self.current;
    }

    /// Move the target by a wheel delta.
    pub fn wheel(&mut self, delta: f64, now_ms: f64) {
        self.scroll_to(self.to + delta * self.opts.wheel_multiplier, now_ms);
    }

    /// Move the target by a touch delta.
    pub fn touch(&mut self, delta: f64, now_ms: f64) {
        self.scroll_to(self.to + delta * self.opts.touch_multiplier, now_ms);
    }

    /// Jump straight to `y` with no animation.
    pub fn jump_to(&mut self, y: f64) {
        if !y.is_finite() {
            return;
        }
        let y = self.clamp_target(y);
        self.from = y;
        self.to = y;
        self.current = y;
        self.animating = false;
    }

    /// Step the animation to `now_ms` and return the displayed position.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        if !self.animating {
            return self.current;
        }
        let duration_ms = self.opts.duration_secs * 1000.0;
        let t = ((now_ms - self.start_ms) / duration_ms).clamp(0.0, 1.0);
        let eased = match self.opts.ease {
            Some(e) => e.apply(t),
            None => default_ease(t),
        };
        if t >= 1.0 || eased >= 1.0 {
            self.current = self.to;
            self.animating = false;
        } else {
            self.current = self.from + (self.to - self.from) * eased;
        }
        self.current
    }

    /// Displayed position as of the last [`SmoothScroll::advance`].
    pub fn position(&self) -> f64 {
        self.current
    }

    /// Current target.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// `true` when the position has reached the target.
    pub fn is_settled(&self) -> bool {
        !self.animating
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
