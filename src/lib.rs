//! A minimal version-control storage engine
//!
//! Project snapshots are persisted as immutable, content-addressed objects
//! and linked into a single linear history:
//!
//! - `areas`: the persisted components (object store, index, refs, config,
//!   working tree) and the [`Repository`](areas::repository::Repository)
//!   handle that owns them
//! - `artifacts`: objects, index entries, status and history algorithms
//! - `commands`: user-facing and low-level operations on a repository
//! - `errors`: the error taxonomy shared by all of the above

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
