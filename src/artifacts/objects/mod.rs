//! Commit-level types the checkpoint engine reads and creates
//!
//! - `object_id`: 40-character commit identifiers
//! - `commit`: commit nodes and wip marker classification
//! - `author`: identity used when creating wip commits

pub mod author;
pub mod commit;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of an abbreviated commit ID
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
