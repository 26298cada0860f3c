use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use crate::{
    compose::snapshot::OutputSnapshot,
    foundation::core::{Progress, Viewport},
    foundation::error::{MotionError, MotionResult},
    scene::model::SceneDef,
    scroll::range::ScrollRange,
    scroll::section::SectionSpec,
};

/// A validated set of tracked sections loaded from JSON.
///
/// Loading fails fast: the first invalid curve, offset, region or duplicate section id is
/// reported with the section and channel it belongs to.
#[derive(Clone, Debug)]
pub struct Scene {
    viewport: Viewport,
    sections: Vec<SectionSpec>,
}

/// One section evaluated at one scroll position.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SectionSample {
    /// Section id.
    pub id: String,
    /// Scroll range in effect.
    pub range: ScrollRange,
    /// Progress and channel values.
    #[serde(flatten)]
    pub snapshot: OutputSnapshot,
}

impl SectionSample {
    /// Progress the section was sampled at.
    pub fn progress(&self) -> Progress {
        self.snapshot.progress()
    }
}

impl Scene {
    /// Scene from already-built sections. Section ids must be unique.
    pub fn new(viewport: Viewport, sections: Vec<SectionSpec>) -> MotionResult<Self> {
        for (i, s) in sections.iter().enumerate() {
            if sections[..i].iter().any(|p| p.id() == s.id()) {
                return Err(MotionError::validation(format!(
                    "duplicate section id '{}'",
                    s.id()
                )));
            }
        }
        Ok(Self { viewport, sections })
    }

    /// Parse a scene from a JSON reader.
    #[tracing::instrument(skip_all)]
    pub fn from_reader<R: std::io::Read>(r: R) -> MotionResult<Self> {
        let def: SceneDef = serde_json::from_reader(r)
            .map_err(|e| MotionError::serde(format!("parse scene JSON: {e}")))?;
        Self::from_def(&def)
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MotionError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a scene from a JSON string.
    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Build a scene from a JSON value.
    pub fn from_value(v: serde_json::Value) -> MotionResult<Self> {
        let def: SceneDef = serde_json::from_value(v)
            .map_err(|e| MotionError::serde(format!("parse scene JSON: {e}")))?;
        Self::from_def(&def)
    }

    fn from_def(def: &SceneDef) -> MotionResult<Self> {
        let viewport = def.viewport.build()?;
        let sections = def
            .sections
            .iter()
            .map(|s| s.build())
            .collect::<MotionResult<Vec<_>>>()?;
        let scene = Self::new(viewport, sections)?;
        tracing::debug!(sections = scene.sections.len(), "loaded scene");
        Ok(scene)
    }

    /// Default viewport declared by the scene.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Sections in declaration order.
    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    /// Section with id `id`.
    pub fn section(&self, id: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Evaluate every section at document scroll position `scroll_y`.
    pub fn sample(&self, scroll_y: f64, viewport: Viewport) -> Vec<SectionSample> {
        self.sections
            .iter()
            .map(|s| SectionSample {
                id: s.id().to_owned(),
                range: s.range(viewport),
                snapshot: s.sample(scroll_y, viewport),
            })
            .collect()
    }
}

impl FromStr for Scene {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        Self::from_json_str(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
