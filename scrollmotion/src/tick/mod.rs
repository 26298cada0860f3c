//! Host events reaching the animator.

/// In-crate frame loop.
pub mod frame_loop;
/// Tick types, listeners and subscriptions.
pub mod source;
