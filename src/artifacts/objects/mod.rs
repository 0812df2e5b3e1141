//! Object types and the content digest that addresses them
//!
//! Every persisted object is identified by the SHA-1 digest of its bytes:
//!
//! - **Blob**: file content, stored verbatim
//! - **Tree**: flat list of (mode, name, oid) entries
//! - **Commit**: tree + optional parent + author + message

pub mod blob;
pub mod commit;
pub mod entry_mode;
pub mod hashing;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
