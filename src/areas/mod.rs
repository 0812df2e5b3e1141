//! Core repository components
//!
//! - `database`: content-addressed object store
//! - `index`: staging area log
//! - `refs`: HEAD and branch tips
//! - `config`: author identity settings
//! - `workspace`: working directory scanning
//! - `repository`: the handle tying all of the above together

pub mod config;
pub mod database;
pub mod index;
pub(crate) mod persist;
pub mod refs;
pub mod repository;
pub mod workspace;
