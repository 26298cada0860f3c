use std::fmt;
use std::str::FromStr;

use crate::{
    foundation::core::{Rect, Viewport},
    foundation::error::{MotionError, MotionResult},
    scroll::range::ScrollRange,
};

/// A point along an extent (the target's height or the viewport's height).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Leading edge (`0`).
    Start,
    /// Middle (`0.5`).
    Center,
    /// Trailing edge (`1`).
    End,
    /// Fraction of the extent; `0.25` or `25%`.
    Fraction(f64),
    /// Fixed pixel offset from the leading edge.
    Px(f64),
}

impl Anchor {
    /// Offset in pixels from the leading edge of an extent of `extent` pixels.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5 * extent,
            Self::End => extent,
            Self::Fraction(f) => f * extent,
            Self::Px(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        let s = s.trim();
        let bad = || MotionError::scroll(format!("invalid anchor '{s}'"));
        let finite = |v: f64| if v.is_finite() { Ok(v) } else { Err(bad()) };
        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => {
                if let Some(px) = s.strip_suffix("px") {
                    let v = px.trim().parse::<f64>().map_err(|_| bad())?;
                    return Ok(Self::Px(finite(v)?));
                }
                if let Some(pct) = s.strip_suffix('%') {
                    let v = pct.trim().parse::<f64>().map_err(|_| bad())?;
                    return Ok(Self::Fraction(finite(v)? / 100.0));
                }
                let v = s.parse::<f64>().map_err(|_| bad())?;
                Ok(Self::Fraction(finite(v)?))
            }
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Center => f.write_str("center"),
            Self::End => f.write_str("end"),
            Self::Fraction(v) => write!(f, "{v}"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// The scroll position at which the target's anchor meets the viewport's anchor.
///
/// Written as `"<target> <viewport>"`, e.g. `"start end"` (target top reaches viewport bottom).
/// A single anchor is used for both sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Anchor on the tracked target.
    pub target: Anchor,
    /// Anchor on the viewport.
    pub viewport: Anchor,
}

impl Edge {
    /// Edge from explicit anchors.
    pub const fn new(target: Anchor, viewport: Anchor) -> Self {
        Self { target, viewport }
    }

    /// Document scroll position at which this edge is met.
    pub fn scroll_position(self, bounds: Rect, viewport: Viewport) -> f64 {
        bounds.y0 + self.target.resolve(bounds.height()) - self.viewport.resolve(viewport.height)
    }
}

impl FromStr for Edge {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        let mut parts = s.split_whitespace();
        let (Some(first), second, None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MotionError::scroll(format!(
                "edge '{s}' must be one or two anchors"
            )));
        };
        let target: Anchor = first.parse()?;
        let viewport = match second {
            Some(v) => v.parse()?,
            None => target,
        };
        Ok(Self { target, viewport })
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.viewport)
    }
}

/// Edges at which a tracked region's progress is `0` and `1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    /// Edge for progress `0`.
    pub start: Edge,
    /// Edge for progress `1`.
    pub end: Edge,
}

impl ScrollOffset {
    /// `["start start", "end end"]`: progress runs while the region is pinned under the viewport.
    pub const PINNED: Self = Self {
        start: Edge::new(Anchor::Start, Anchor::Start),
        end: Edge::new(Anchor::End, Anchor::End),
    };

    /// `["start end", "end start"]`: progress runs from first pixel visible to last pixel gone.
    pub const ENTER_TO_EXIT: Self = Self {
        start: Edge::new(Anchor::Start, Anchor::End),
        end: Edge::new(Anchor::End, Anchor::Start),
    };

    /// Offset from explicit edges.
    pub const fn new(start: Edge, end: Edge) -> Self {
        Self { start, end }
    }

    /// Parse a `[start, end]` pair, e.g. `["start end", "end start"]`.
    pub fn parse(start: &str, end: &str) -> MotionResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Scroll positions of both edges for a region at `bounds`.
    pub fn resolve(self, bounds: Rect, viewport: Viewport) -> ScrollRange {
        ScrollRange::between(
            self.start.scroll_position(bounds, viewport),
            self.end.scroll_position(bounds, viewport),
        )
    }
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::PINNED
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/offset.rs"]
mod tests;
