//! Plumbing commands (low-level object operations)
//!
//! ## Commands
//!
//! - `hash-object`: Compute an object ID and optionally store the blob
//! - `cat-file`: Print the raw bytes of a stored object
//! - `ls-tree`: List the entries of a tree
//! - `write_tree` / `write_commit`: building blocks of `commit`

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
pub mod write_commit;
