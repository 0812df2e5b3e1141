#![allow(dead_code)]

pub mod command;
pub mod file;

use std::path::PathBuf;

fn playground() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("playground")
}

/// Keep test repositories out of the system temp dir
pub fn redirect_temp_dir() {
    let playground = playground();

    if !playground.exists() {
        std::fs::create_dir_all(&playground).expect("Failed to create TMPDIR");
    }

    unsafe {
        std::env::set_var("TMPDIR", &playground);
    }
}
