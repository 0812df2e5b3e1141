//! Value types and algorithms
//!
//! - `objects`: digests, blobs, trees and commits
//! - `index`: staging index entries
//! - `status`: working tree classification
//! - `log`: history traversal
//! - `core`: output plumbing

pub mod core;
pub mod index;
pub mod log;
pub mod objects;
pub mod status;
