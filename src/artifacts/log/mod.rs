//! Commit history traversal
//!
//! - `rev_list`: first-parent walk from HEAD used to find the restore point

pub mod rev_list;
