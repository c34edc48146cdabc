//! Repository access
//!
//! - `repository`: the backend interface the checkpoint engine consumes, and
//!   its libgit2 implementation

pub mod repository;
