//! Scroll geometry, tracked regions and the behaviours built on them.

/// Appearance when a region enters the viewport.
pub mod in_view;
/// Edge and offset parsing.
pub mod offset;
/// Scroll ranges and region placement.
pub mod range;
/// Section configuration.
pub mod section;
/// Eased scroll input.
pub mod smooth;
/// Scroll thresholds and the toggles they drive.
pub mod threshold;
/// Mounted regions that follow a tick source.
pub mod tracker;
