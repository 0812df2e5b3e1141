//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Record the staged snapshot
//! - `status`: Classify staged, modified and untracked files
//! - `log`: Show commit history
//! - `config`: Read or set the author identity

pub mod add;
pub mod commit;
pub mod config;
pub mod init;
pub mod log;
pub mod status;
