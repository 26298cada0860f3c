use std::sync::Arc;

use smallvec::SmallVec;

use crate::{
    animation::curve::Curve,
    animation::length::Length,
    compose::snapshot::{OutputSnapshot, Value},
    foundation::core::Progress,
    foundation::error::{MotionError, MotionResult},
};

/// Visual property a channel drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Opacity, numeric in `[0, 1]`.
    Opacity,
    /// Horizontal offset, a length.
    TranslateX,
    /// Vertical offset, a length.
    TranslateY,
    /// Unitless scale multiplier.
    Scale,
    /// Rotation in degrees.
    Rotate,
    /// Blur radius, a non-negative length.
    Blur,
}

impl Property {
    /// `true` when the property takes [`Length`] values rather than plain numbers.
    pub fn takes_length(self) -> bool {
        matches!(self, Self::TranslateX | Self::TranslateY | Self::Blur)
    }

    /// CSS-ish name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::TranslateX => "translate_x",
            Self::TranslateY => "translate_y",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
            Self::Blur => "blur",
        }
    }
}

/// Curve of either value kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelCurve {
    /// Numeric curve.
    Number(Curve<f64>),
    /// Length curve with a single unit.
    Length(Curve<Length>),
}

impl ChannelCurve {
    /// Sample at `progress`.
    pub fn sample(&self, progress: Progress) -> Value {
        match self {
            Self::Number(c) => Value::Number(c.sample(progress)),
            Self::Length(c) => Value::Length(c.sample(progress)),
        }
    }
}

impl From<Curve<f64>> for ChannelCurve {
    fn from(c: Curve<f64>) -> Self {
        Self::Number(c)
    }
}

impl From<Curve<Length>> for ChannelCurve {
    fn from(c: Curve<Length>) -> Self {
        Self::Length(c)
    }
}

/// A named output slot bound to one property and one curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    name: String,
    property: Property,
    curve: ChannelCurve,
}

impl Channel {
    /// Bind `curve` to `property` under `name`, checking that the values suit the property.
    pub fn new(
        name: impl Into<String>,
        property: Property,
        curve: impl Into<ChannelCurve>,
    ) -> MotionResult<Self> {
        let name = name.into();
        let curve = curve.into();
        if name.is_empty() {
            return Err(MotionError::validation("channel name must not be empty"));
        }
        match (&curve, property.takes_length()) {
            (ChannelCurve::Number(_), true) => {
                return Err(MotionError::curve(format!(
                    "channel '{name}': {} expects a length curve",
                    property.name()
                )));
            }
            (ChannelCurve::Length(_), false) => {
                return Err(MotionError::curve(format!(
                    "channel '{name}': {} expects a numeric curve",
                    property.name()
                )));
            }
            _ => {}
        }
        match (&curve, property) {
            (ChannelCurve::Number(c), Property::Opacity) => {
                if c.keys().iter().any(|k| !(0.0..=1.0).contains(&k.value)) {
                    return Err(MotionError::curve(format!(
                        "channel '{name}': opacity values must be within [0, 1]"
                    )));
                }
            }
            (ChannelCurve::Length(c), Property::Blur) => {
                if c.keys().iter().any(|k| k.value.value < 0.0) {
                    return Err(MotionError::curve(format!(
                        "channel '{name}': blur radius must be >= 0"
                    )));
                }
            }
            _ => {}
        }
        Ok(Self {
            name,
            property,
            curve,
        })
    }

    /// Channel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Driven property.
    pub fn property(&self) -> Property {
        self.property
    }

    /// Underlying curve.
    pub fn curve(&self) -> &ChannelCurve {
        &self.curve
    }

    /// Sample this channel alone.
    pub fn sample(&self, progress: Progress) -> Value {
        self.curve.sample(progress)
    }
}

/// The channels of one section, composed together into an [`OutputSnapshot`].
///
/// Channels are independent: each is sampled from the same progress and none reads another's
/// output.
#[derive(Clone, Debug, Default)]
pub struct ChannelSet {
    channels: Vec<Channel>,
    names: Arc<[String]>,
    properties: Arc<[Property]>,
}

impl ChannelSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from channels, rejecting duplicate names.
    pub fn from_channels(channels: impl IntoIterator<Item = Channel>) -> MotionResult<Self> {
        let mut set = Self::new();
        for c in channels {
            set.push(c)?;
        }
        Ok(set)
    }

    /// Append a channel; names must be unique within the set.
    pub fn push(&mut self, channel: Channel) -> MotionResult<()> {
        if self.channels.iter().any(|c| c.name == channel.name) {
            return Err(MotionError::validation(format!(
                "duplicate channel '{}'",
                channel.name
            )));
        }
        self.channels.push(channel);
        self.names = self.channels.iter().map(|c| c.name.clone()).collect();
        self.properties = self.channels.iter().map(|c| c.property).collect();
        Ok(())
    }

    /// Builder form of [`ChannelSet::push`].
    pub fn with(mut self, channel: Channel) -> MotionResult<Self> {
        self.push(channel)?;
        Ok(self)
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// `true` when there are no channels.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    /// Look up a channel by name.
    pub fn get(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name == name)
    }

    /// Compose a fresh snapshot at `progress`.
    pub fn compose(&self, progress: Progress) -> OutputSnapshot {
        let mut out = OutputSnapshot::empty();
        self.compose_into(progress, &mut out);
        out
    }

    /// Compose into `out`, reusing its storage.
    pub fn compose_into(&self, progress: Progress, out: &mut OutputSnapshot) {
        let mut values: SmallVec<[Value; 8]> = std::mem::take(&mut out.values);
        values.clear();
        values.extend(self.channels.iter().map(|c| c.sample(progress)));
        *out = OutputSnapshot {
            progress,
            names: Arc::clone(&self.names),
            properties: Arc::clone(&self.properties),
            values,
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/channel.rs"]
mod tests;
