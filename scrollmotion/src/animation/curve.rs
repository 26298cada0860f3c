use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    animation::length::Length,
    foundation::core::Progress,
    foundation::error::{MotionError, MotionResult},
    foundation::math::bounded_lerp,
};

/// Interpolation contract for curve value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// `true` when `a` and `b` may share one curve (same kind, same unit).
    fn compatible(_a: &Self, _b: &Self) -> bool {
        true
    }

    /// `true` when the value is usable as a keyframe (no NaN or infinities).
    fn is_finite(&self) -> bool;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        bounded_lerp(*a, *b, t)
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Lerp for Length {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Length::new(bounded_lerp(a.value, b.value, t), a.unit)
    }

    fn compatible(a: &Self, b: &Self) -> bool {
        a.unit == b.unit
    }

    fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// One breakpoint of a [`Curve`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Progress at which `value` is reached, in `[0, 1]`.
    pub at: f64,
    /// Output value at `at`.
    pub value: T,
    /// Easing applied toward the next keyframe.
    #[serde(default)]
    pub ease: Ease,
}

impl<T> Keyframe<T> {
    /// Linear keyframe.
    pub fn new(at: f64, value: T) -> Self {
        Self {
            at,
            value,
            ease: Ease::Linear,
        }
    }

    /// Replace the easing toward the next keyframe.
    pub fn eased(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Piecewise interpolation from [`Progress`] to one output value.
///
/// Keys are validated once at construction, after which [`Curve::sample`] is total: it clamps
/// below the first and above the last breakpoint, and returns each breakpoint's value exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve<T> {
    keys: SmallVec<[Keyframe<T>; 4]>,
}

impl<T> Curve<T>
where
    T: Lerp + Clone,
{
    /// Build a curve whose breakpoints are strictly ascending.
    pub fn new(keys: impl IntoIterator<Item = Keyframe<T>>) -> MotionResult<Self> {
        Self::build(keys.into_iter().collect(), false)
    }

    /// Build a curve that also accepts equal adjacent breakpoints.
    ///
    /// A repeated breakpoint is a step: below it the earlier value holds, at and above it the
    /// later value applies.
    pub fn with_steps(keys: impl IntoIterator<Item = Keyframe<T>>) -> MotionResult<Self> {
        Self::build(keys.into_iter().collect(), true)
    }

    /// Build a linear curve from parallel breakpoint and value lists.
    pub fn from_points(points: &[f64], values: impl IntoIterator<Item = T>) -> MotionResult<Self> {
        let values: Vec<T> = values.into_iter().collect();
        if points.len() != values.len() {
            return Err(MotionError::curve(format!(
                "curve has {} breakpoints but {} values",
                points.len(),
                values.len()
            )));
        }
        Self::new(
            points
                .iter()
                .zip(values)
                .map(|(&at, value)| Keyframe::new(at, value)),
        )
    }

    /// Curve that always returns `value`.
    pub fn constant(value: T) -> Self {
        let mut keys = SmallVec::new();
        keys.push(Keyframe::new(0.0, value));
        Self { keys }
    }

    fn build(keys: SmallVec<[Keyframe<T>; 4]>, allow_steps: bool) -> MotionResult<Self> {
        let Some(first) = keys.first() else {
            return Err(MotionError::curve("curve must have at least one keyframe"));
        };
        for (i, k) in keys.iter().enumerate() {
            if !(k.at.is_finite() && (0.0..=1.0).contains(&k.at)) {
                return Err(MotionError::curve(format!(
                    "breakpoint #{i} ({}) must be within [0, 1]",
                    k.at
                )));
            }
            if !k.value.is_finite() {
                return Err(MotionError::curve(format!(
                    "value at breakpoint #{i} must be finite"
                )));
            }
            if !T::compatible(&first.value, &k.value) {
                return Err(MotionError::curve(format!(
                    "value at breakpoint #{i} does not match the curve's unit"
                )));
            }
        }
        for (i, w) in keys.windows(2).enumerate() {
            let ordered = if allow_steps {
                w[0].at <= w[1].at
            } else {
                w[0].at < w[1].at
            };
            if !ordered {
                return Err(MotionError::curve(format!(
                    "breakpoints must be {} (#{} = {}, #{} = {})",
                    if allow_steps {
                        "ascending"
                    } else {
                        "strictly ascending"
                    },
                    i,
                    w[0].at,
                    i + 1,
                    w[1].at
                )));
            }
        }
        Ok(Self { keys })
    }

    /// Keyframes in breakpoint order.
    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    /// Sample the curve at `progress`.
    pub fn sample(&self, progress: Progress) -> T {
        let p = progress.get();
        let idx = self.keys.partition_point(|k| k.at <= p);

        if idx == 0 {
            return self.keys[0].value.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at - a.at;
        if span <= 0.0 {
            return a.value.clone();
        }

        let t = (p - a.at) / span;
        T::lerp(&a.value, &b.value, a.ease.apply(t))
    }

    /// Sample at a raw progress value; clamps first.
    pub fn sample_at(&self, progress: f64) -> T {
        self.sample(Progress::new(progress))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
