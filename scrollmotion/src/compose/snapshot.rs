use std::sync::Arc;

use serde::ser::{SerializeMap, SerializeStruct};
use smallvec::SmallVec;

use crate::{
    animation::curve::Lerp,
    animation::length::Length,
    compose::channel::Property,
    compose::fingerprint::{SnapshotFingerprint, fingerprint_values},
    foundation::core::{Progress, Viewport},
};

/// One sampled channel value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Plain number (opacity, scale, rotation).
    Number(f64),
    /// Length with unit (translation, blur).
    Length(Length),
}

impl Value {
    /// Numeric payload, if this is a number.
    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(v),
            Self::Length(_) => None,
        }
    }

    /// Length payload, if this is a length.
    pub fn as_length(self) -> Option<Length> {
        match self {
            Self::Number(_) => None,
            Self::Length(l) => Some(l),
        }
    }

    /// Number in CSS pixels for lengths, or the number itself.
    pub fn resolve(self, viewport: Viewport) -> f64 {
        match self {
            Self::Number(v) => v,
            Self::Length(l) => l.resolve_px(viewport),
        }
    }
}

impl Lerp for Value {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Number(x), Self::Number(y)) => Self::Number(<f64 as Lerp>::lerp(x, y, t)),
            (Self::Length(x), Self::Length(y)) if Length::compatible(x, y) => {
                Self::Length(<Length as Lerp>::lerp(x, y, t))
            }
            // incompatible pairs switch at the end
            _ => {
                if t >= 1.0 {
                    *b
                } else {
                    *a
                }
            }
        }
    }

    fn compatible(a: &Self, b: &Self) -> bool {
        match (a, b) {
            (Self::Number(_), Self::Number(_)) => true,
            (Self::Length(x), Self::Length(y)) => Length::compatible(x, y),
            _ => false,
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            Self::Number(v) => v.is_finite(),
            Self::Length(l) => l.value.is_finite(),
        }
    }
}

/// Channel values of one section at one progress.
///
/// Snapshots are recomputed, never accumulated: composing again at the same progress yields an
/// equal snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputSnapshot {
    pub(crate) progress: Progress,
    pub(crate) names: Arc<[String]>,
    pub(crate) properties: Arc<[Property]>,
    pub(crate) values: SmallVec<[Value; 8]>,
}

impl OutputSnapshot {
    /// Snapshot with no channels at progress 0.
    pub fn empty() -> Self {
        Self {
            progress: Progress::START,
            names: Arc::from(Vec::new()),
            properties: Arc::from(Vec::new()),
            values: SmallVec::new(),
        }
    }

    /// Progress the snapshot was composed at.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when there are no channels.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of the channel called `name`.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    /// Numeric value of the channel called `name`.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_number)
    }

    /// Length value of the channel called `name`.
    pub fn length(&self, name: &str) -> Option<Length> {
        self.get(name).and_then(Value::as_length)
    }

    /// `(name, property, value)` triples in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Property, Value)> + '_ {
        self.names
            .iter()
            .zip(self.properties.iter())
            .zip(self.values.iter())
            .map(|((n, p), v)| (n.as_str(), *p, *v))
    }

    /// Stable fingerprint of the channel values.
    ///
    /// Progress is not hashed: two progress values that produce identical visuals share a
    /// fingerprint.
    pub fn fingerprint(&self) -> SnapshotFingerprint {
        fingerprint_values(&self.names, &self.values)
    }
}

struct ChannelMap<'a>(&'a OutputSnapshot);

impl serde::Serialize for ChannelMap<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, _, value) in self.0.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

impl serde::Serialize for OutputSnapshot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("OutputSnapshot", 2)?;
        s.serialize_field("progress", &self.progress)?;
        s.serialize_field("channels", &ChannelMap(self))?;
        s.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/snapshot.rs"]
mod tests;
