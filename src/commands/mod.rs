//! Command implementations
//!
//! - `plumbing`: Low-level object commands (hash-object, cat-file, ls-tree)
//! - `porcelain`: User-facing workflow commands (init, add, commit, status, log, config)
//!
//! Each command is an `impl Repository` block. Core operations return data;
//! the `show_*` variants render it to the repository's writer.

pub mod plumbing;
pub mod porcelain;
