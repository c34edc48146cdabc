//! Working tree status snapshots
//!
//! - `file_change`: per-area file states and their porcelain codes
//! - `status_info`: the snapshot itself and its classification

pub mod file_change;
pub mod status_info;
