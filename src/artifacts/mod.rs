//! Wip data structures and algorithms
//!
//! - `checkpoint`: the checkpoint engine (wip commit creation and unwinding)
//! - `log`: first-parent history traversal
//! - `objects`: commits, commit IDs and author identity
//! - `status`: working tree status snapshots and their classification

pub mod checkpoint;
pub mod log;
pub mod objects;
pub mod status;
