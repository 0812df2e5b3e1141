//! Commit history traversal
//!
//! History is strictly linear: every commit has at most one parent, so a
//! log is a walk from the branch tip back to the root commit.

pub mod rev_list;
