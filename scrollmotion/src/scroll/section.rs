use crate::{
    compose::channel::ChannelSet,
    compose::responsive::Responsive,
    compose::snapshot::OutputSnapshot,
    foundation::core::{Progress, Rect, Viewport},
    foundation::error::{MotionError, MotionResult},
    scroll::offset::ScrollOffset,
    scroll::range::{RegionLayout, ScrollRange},
};

/// Static configuration of one tracked section: where it sits, which edges bound its progress,
/// and the channels it drives.
#[derive(Clone, Debug)]
pub struct SectionSpec {
    id: String,
    layout: RegionLayout,
    offset: ScrollOffset,
    channels: Responsive,
}

impl SectionSpec {
    /// Section `id` placed at `layout`.
    pub fn new(
        id: impl Into<String>,
        layout: RegionLayout,
        offset: ScrollOffset,
        channels: impl Into<Responsive>,
    ) -> MotionResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(MotionError::validation("section id must not be empty"));
        }
        Ok(Self {
            id,
            layout,
            offset,
            channels: channels.into(),
        })
    }

    /// Section id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Placement in the document.
    pub fn layout(&self) -> RegionLayout {
        self.layout
    }

    /// Progress edges.
    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Channels, with their responsive variants.
    pub fn channels(&self) -> &Responsive {
        &self.channels
    }

    /// Region bounds in document pixels.
    pub fn bounds(&self, viewport: Viewport) -> Rect {
        self.layout.resolve(viewport)
    }

    /// Scroll range for `viewport`.
    pub fn range(&self, viewport: Viewport) -> ScrollRange {
        self.offset.resolve(self.bounds(viewport), viewport)
    }

    /// Channels active at `viewport`.
    pub fn channel_set(&self, viewport: Viewport) -> &ChannelSet {
        self.channels.select(viewport)
    }

    /// Progress at document scroll position `scroll_y`.
    pub fn progress(&self, scroll_y: f64, viewport: Viewport) -> Progress {
        self.range(viewport).progress_at(scroll_y)
    }

    /// Compose the section's snapshot at `scroll_y`.
    pub fn sample(&self, scroll_y: f64, viewport: Viewport) -> OutputSnapshot {
        self.channel_set(viewport)
            .compose(self.progress(scroll_y, viewport))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/section.rs"]
mod tests;
