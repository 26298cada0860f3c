//! Keyframe curves, easing, lengths and time-based tweens.

/// Keyframes, curves and the [`curve::Lerp`] contract.
pub mod curve;
/// Easing functions.
pub mod ease;
/// CSS-style lengths (`50vh`, `-20px`).
pub mod length;
/// Helpers that derive timing for groups of animations.
pub mod ops;
/// Wall-clock tweens.
pub mod tween;
