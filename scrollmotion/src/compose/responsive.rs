use crate::{
    compose::channel::ChannelSet,
    foundation::core::Viewport,
    foundation::error::{MotionError, MotionResult},
};

/// Alternative channels used while the viewport is at most `max_width_px` wide.
#[derive(Clone, Debug)]
pub struct Variant {
    /// Inclusive upper bound on viewport width.
    pub max_width_px: f64,
    /// Channels used inside the bound.
    pub channels: ChannelSet,
}

/// A default channel set plus width-bounded variants (e.g. mobile fade points).
#[derive(Clone, Debug, Default)]
pub struct Responsive {
    default: ChannelSet,
    variants: Vec<Variant>, // sorted by max_width_px ascending
}

impl Responsive {
    /// Responsive set with only a default.
    pub fn new(default: ChannelSet) -> Self {
        Self {
            default,
            variants: Vec::new(),
        }
    }

    /// Add a variant. Widths must be finite, positive and unique.
    pub fn variant(mut self, max_width_px: f64, channels: ChannelSet) -> MotionResult<Self> {
        if !(max_width_px.is_finite() && max_width_px > 0.0) {
            return Err(MotionError::validation(
                "variant max_width_px must be finite and > 0",
            ));
        }
        if self.variants.iter().any(|v| v.max_width_px == max_width_px) {
            return Err(MotionError::validation(format!(
                "duplicate variant for max_width_px {max_width_px}"
            )));
        }
        let at = self
            .variants
            .partition_point(|v| v.max_width_px < max_width_px);
        self.variants.insert(
            at,
            Variant {
                max_width_px,
                channels,
            },
        );
        Ok(self)
    }

    /// Default channels.
    pub fn default_set(&self) -> &ChannelSet {
        &self.default
    }

    /// Variants, narrowest first.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Index of the variant active at `viewport`; `None` selects the default set.
    pub fn select_index(&self, viewport: Viewport) -> Option<usize> {
        self.variants
            .iter()
            .position(|v| viewport.width <= v.max_width_px)
    }

    /// Channels active at `viewport`: the narrowest matching variant, else the default.
    pub fn select(&self, viewport: Viewport) -> &ChannelSet {
        self.resolve(self.select_index(viewport))
    }

    pub(crate) fn resolve(&self, idx: Option<usize>) -> &ChannelSet {
        match idx {
            Some(i) => &self.variants[i].channels,
            None => &self.default,
        }
    }
}

impl From<ChannelSet> for Responsive {
    fn from(set: ChannelSet) -> Self {
        Self::new(set)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/responsive.rs"]
mod tests;
