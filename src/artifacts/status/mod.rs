//! Working tree status
//!
//! Reconciles three populations of files: the staging index, the tree of the
//! last commit and the files currently in the working directory.
//!
//! - `file_change`: change categories and their labels
//! - `status_info`: the classification algorithm and its report

pub mod file_change;
pub mod status_info;
