use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::animation::curve::{Curve, Keyframe, Lerp};
use crate::animation::ease::Ease;
use crate::animation::length::{Length, Unit};
use crate::compose::channel::{Channel, ChannelCurve, ChannelSet, Property};
use crate::compose::responsive::Responsive;
use crate::foundation::core::Viewport;
use crate::foundation::error::{MotionError, MotionResult};
use crate::scroll::offset::ScrollOffset;
use crate::scroll::range::RegionLayout;
use crate::scroll::section::SectionSpec;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SceneDef {
    #[serde(default)]
    pub(crate) viewport: ViewportDef,
    #[serde(default)]
    pub(crate) sections: Vec<SectionDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct ViewportDef {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Default for ViewportDef {
    fn default() -> Self {
        let vp = Viewport::default();
        Self {
            width: vp.width,
            height: vp.height,
        }
    }
}

impl ViewportDef {
    pub(crate) fn build(self) -> MotionResult<Viewport> {
        Viewport::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SectionDef {
    pub(crate) id: String,
    pub(crate) region: RegionDef,
    #[serde(default = "SectionDef::default_offset")]
    pub(crate) offset: [String; 2],
    #[serde(default)]
    pub(crate) channels: BTreeMap<String, ChannelDef>,
    #[serde(default)]
    pub(crate) variants: Vec<VariantDef>,
}

impl SectionDef {
    fn default_offset() -> [String; 2] {
        ["start start".to_owned(), "end end".to_owned()]
    }

    pub(crate) fn build(&self) -> MotionResult<SectionSpec> {
        let layout = self.region.build()?;
        let offset = ScrollOffset::parse(&self.offset[0], &self.offset[1])
            .map_err(|e| MotionError::scroll(format!("section '{}': {e}", self.id)))?;
        let mut channels = Responsive::new(build_channels(&self.id, &self.channels)?);
        for v in &self.variants {
            let set = build_channels(&self.id, &v.channels)?;
            channels = channels.variant(v.max_width_px, set)?;
        }
        SectionSpec::new(self.id.clone(), layout, offset, channels)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RegionDef {
    pub(crate) top: Length,
    pub(crate) height: Length,
}

impl RegionDef {
    fn build(self) -> MotionResult<RegionLayout> {
        RegionLayout::new(self.top, self.height)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct VariantDef {
    pub(crate) max_width_px: f64,
    #[serde(default)]
    pub(crate) channels: BTreeMap<String, ChannelDef>,
}

/// Curve given either as parallel `points`/`values` lists or as explicit `keys`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ChannelDef {
    pub(crate) property: Property,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) points: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) values: Option<Vec<Length>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) keys: Option<Vec<KeyDef>>,
    /// Accept equal adjacent breakpoints as steps.
    #[serde(default)]
    pub(crate) steps: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct KeyDef {
    pub(crate) at: f64,
    pub(crate) value: Length,
    #[serde(default)]
    pub(crate) ease: Ease,
}

fn build_channels(id: &str, defs: &BTreeMap<String, ChannelDef>) -> MotionResult<ChannelSet> {
    let mut set = ChannelSet::new();
    for (name, def) in defs {
        let curve = def.build_curve().map_err(|e| {
            MotionError::validation(format!("section '{id}', channel '{name}': {e}"))
        })?;
        set.push(Channel::new(name.clone(), def.property, curve)?)?;
    }
    Ok(set)
}

impl ChannelDef {
    fn keys(&self) -> MotionResult<Vec<KeyDef>> {
        match (&self.points, &self.values, &self.keys) {
            (Some(points), Some(values), None) => {
                if points.len() != values.len() {
                    return Err(MotionError::curve(format!(
                        "{} points but {} values",
                        points.len(),
                        values.len()
                    )));
                }
                Ok(points
                    .iter()
                    .zip(values)
                    .map(|(&at, &value)| KeyDef {
                        at,
                        value,
                        ease: Ease::Linear,
                    })
                    .collect())
            }
            (None, None, Some(keys)) => Ok(keys.clone()),
            _ => Err(MotionError::validation(
                "channel needs either `points` with `values`, or `keys`",
            )),
        }
    }

    fn build_curve(&self) -> MotionResult<ChannelCurve> {
        let keys = self.keys()?;
        if self.property.takes_length() {
            let frames = keys.iter().map(|k| {
                // bare numbers on translate/blur are pixels
                let value = match k.value.unit {
                    Unit::None => Length::px(k.value.value),
                    _ => k.value,
                };
                Keyframe::new(k.at, value).eased(k.ease)
            });
            Ok(self.curve(frames)?.into())
        } else {
            let mut frames = Vec::with_capacity(keys.len());
            for k in &keys {
                if k.value.unit != Unit::None {
                    return Err(MotionError::curve(format!(
                        "{} values must be plain numbers, got '{}'",
                        self.property.name(),
                        k.value
                    )));
                }
                frames.push(Keyframe::new(k.at, k.value.value).eased(k.ease));
            }
            Ok(self.curve(frames)?.into())
        }
    }

    fn curve<T>(&self, frames: impl IntoIterator<Item = Keyframe<T>>) -> MotionResult<Curve<T>>
    where
        T: Lerp + Clone,
    {
        if self.steps {
            Curve::with_steps(frames)
        } else {
            Curve::new(frames)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
