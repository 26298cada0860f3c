//! Channels and the snapshots composed from them.

/// Named channels and channel sets.
pub mod channel;
/// Stable snapshot fingerprints.
pub mod fingerprint;
/// Width-bounded channel variants.
pub mod responsive;
/// Output snapshots.
pub mod snapshot;
