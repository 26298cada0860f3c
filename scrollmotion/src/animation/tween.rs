use crate::animation::curve::Lerp;
use crate::animation::ease::Ease;
use crate::foundation::error::{MotionError, MotionResult};

/// Timing for a time-based transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// Duration in seconds; `0` jumps straight to the target once the delay has passed.
    pub duration_secs: f64,
    /// Delay before the transition starts, in seconds.
    #[serde(default)]
    pub delay_secs: f64,
    /// Easing over the transition.
    #[serde(default)]
    pub ease: Ease,
}

impl Transition {
    /// Linear transition without delay.
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs,
            delay_secs: 0.0,
            ease: Ease::Linear,
        }
    }

    /// Replace the delay.
    pub fn delayed(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    /// Replace the easing.
    pub fn eased(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Check that durations are finite and non-negative.
    pub fn validate(&self) -> MotionResult<()> {
        if !(self.duration_secs.is_finite() && self.duration_secs >= 0.0) {
            return Err(MotionError::validation(
                "Transition duration must be finite and >= 0",
            ));
        }
        if !(self.delay_secs.is_finite() && self.delay_secs >= 0.0) {
            return Err(MotionError::validation(
                "Transition delay must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// A value animated over wall-clock time toward a target.
///
/// Retargeting starts from wherever the value currently is, so an interrupted transition never
/// jumps.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    start_ms: f64,
    transition: Transition,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// A tween resting at `value`.
    pub fn settled(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            start_ms: 0.0,
            transition: Transition::new(0.0),
        }
    }

    /// Animate toward `to`, starting from the value sampled at `now_ms`.
    pub fn retarget(&mut self, to: T, now_ms: f64, transition: Transition) {
        self.from = self.sample(now_ms);
        self.to = to;
        self.start_ms = now_ms;
        self.transition = transition;
    }

    /// Target of the current transition.
    pub fn target(&self) -> &T {
        &self.to
    }

    fn fraction(&self, now_ms: f64) -> f64 {
        let begin = self.start_ms + self.transition.delay_secs * 1000.0;
        let duration_ms = self.transition.duration_secs * 1000.0;
        if now_ms < begin {
            return 0.0;
        }
        if duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - begin) / duration_ms).clamp(0.0, 1.0)
    }

    /// Value at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> T {
        let t = self.fraction(now_ms);
        if t >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.transition.ease.apply(t))
    }

    /// `true` once the transition has reached its target.
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.fraction(now_ms) >= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
