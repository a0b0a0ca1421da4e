//! In-memory display projection.

/// Projection rows, name index, and sync state.
pub mod projection;
