use std::sync::Arc;

use smallvec::SmallVec;

use crate::{
    animation::curve::Curve,
    animation::tween::{Transition, Tween},
    compose::channel::{Channel, ChannelCurve, Property},
    compose::snapshot::{OutputSnapshot, Value},
    foundation::core::Progress,
    foundation::error::{MotionError, MotionResult},
};

/// Direction of a threshold crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossing {
    /// Scrolled past the threshold.
    Above,
    /// Scrolled back to or before the threshold.
    Below,
}

/// Tracks whether `scroll_y > threshold` and reports only changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdWatch {
    threshold: f64,
    above: bool,
}

impl ThresholdWatch {
    /// Watch starting below the threshold (page at the top).
    pub fn new(threshold: f64) -> MotionResult<Self> {
        if !threshold.is_finite() {
            return Err(MotionError::scroll("threshold must be finite"));
        }
        Ok(Self {
            threshold,
            above: false,
        })
    }

    /// Threshold in pixels.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// `true` while past the threshold.
    pub fn is_above(&self) -> bool {
        self.above
    }

    /// Feed a scroll position. Returns the crossing if the state changed.
    pub fn observe(&mut self, scroll_y: f64) -> Option<Crossing> {
        if !scroll_y.is_finite() {
            return None;
        }
        let above = scroll_y > self.threshold;
        if above == self.above {
            return None;
        }
        self.above = above;
        Some(if above {
            Crossing::Above
        } else {
            Crossing::Below
        })
    }
}

/// Values of one channel on either side of a threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleChannel {
    /// Channel name.
    pub name: String,
    /// Bound property.
    pub property: Property,
    /// Value at or before the threshold.
    pub below: Value,
    /// Value past the threshold.
    pub above: Value,
}

impl ToggleChannel {
    /// Pair of values for `name`.
    pub fn new(name: impl Into<String>, property: Property, below: Value, above: Value) -> Self {
        Self {
            name: name.into(),
            property,
            below,
            above,
        }
    }

    fn validate(&self) -> MotionResult<()> {
        let curve: ChannelCurve = match (self.below, self.above) {
            (Value::Number(b), Value::Number(a)) => Curve::from_points(&[0.0, 1.0], [b, a])?.into(),
            (Value::Length(b), Value::Length(a)) => Curve::from_points(&[0.0, 1.0], [b, a])?.into(),
            _ => {
                return Err(MotionError::validation(format!(
                    "toggle channel '{}': both values must be numbers or both lengths",
                    self.name
                )));
            }
        };
        Channel::new(self.name.clone(), self.property, curve).map(|_| ())
    }
}

/// A [`ThresholdWatch`] driving a time-based tween per channel.
///
/// Crossing the threshold retargets every channel toward its `above` (or `below`) value from
/// wherever it currently is.
#[derive(Clone, Debug)]
pub struct ThresholdToggle {
    watch: ThresholdWatch,
    transition: Transition,
    names: Arc<[String]>,
    properties: Arc<[Property]>,
    targets: Vec<(Value, Value)>,
    tweens: Vec<Tween<Value>>,
}

impl ThresholdToggle {
    /// Toggle at `threshold` pixels animating with `transition`.
    pub fn new(
        threshold: f64,
        transition: Transition,
        channels: impl IntoIterator<Item = ToggleChannel>,
    ) -> MotionResult<Self> {
        let watch = ThresholdWatch::new(threshold)?;
        transition.validate()?;
        let channels: Vec<ToggleChannel> = channels.into_iter().collect();
        for (i, c) in channels.iter().enumerate() {
            c.validate()?;
            if channels[..i].iter().any(|p| p.name == c.name) {
                return Err(MotionError::validation(format!(
                    "duplicate toggle channel '{}'",
                    c.name
                )));
            }
        }
        Ok(Self {
            watch,
            transition,
            names: channels.iter().map(|c| c.name.clone()).collect(),
            properties: channels.iter().map(|c| c.property).collect(),
            targets: channels.iter().map(|c| (c.below, c.above)).collect(),
            tweens: channels.iter().map(|c| Tween::settled(c.below)).collect(),
        })
    }

    /// Underlying watch.
    pub fn watch(&self) -> &ThresholdWatch {
        &self.watch
    }

    /// Feed a scroll position at `now_ms`; retargets the tweens on a crossing.
    pub fn observe(&mut self, scroll_y: f64, now_ms: f64) -> Option<Crossing> {
        let crossing = self.watch.observe(scroll_y)?;
        tracing::debug!(?crossing, scroll_y, "threshold crossed");
        for (tween, (below, above)) in self.tweens.iter_mut().zip(&self.targets) {
            let to = match crossing {
                Crossing::Above => *above,
                Crossing::Below => *below,
            };
            tween.retarget(to, now_ms, self.transition);
        }
        Some(crossing)
    }

    /// Channel values at `now_ms`. Progress is `1` past the threshold, else `0`.
    pub fn sample(&self, now_ms: f64) -> OutputSnapshot {
        let values: SmallVec<[Value; 8]> = self.tweens.iter().map(|t| t.sample(now_ms)).collect();
        OutputSnapshot {
            progress: if self.watch.is_above() {
                Progress::END
            } else {
                Progress::START
            },
            names: Arc::clone(&self.names),
            properties: Arc::clone(&self.properties),
            values,
        }
    }

    /// `true` once every tween has reached its target.
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.tweens.iter().all(|t| t.is_settled(now_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/threshold.rs"]
mod tests;
