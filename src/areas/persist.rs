//! Crash-safe file replacement
//!
//! Mutable repository files (index, refs, config) are never rewritten in
//! place: the new content goes to a temporary sibling which is then renamed
//! over the target, so readers see either the old or the new file.

use crate::errors::{IoContext, Result};
use fake::rand;
use std::io::Write;
use std::path::Path;

pub(crate) fn generate_temp_name(prefix: &str) -> String {
    format!("tmp-{prefix}-{}", rand::random::<u32>())
}

pub(crate) fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = dir.join(generate_temp_name(&file_name));

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .io_context(|| format!("Unable to create temporary file {}", temp_path.display()))?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .io_context(|| format!("Unable to write temporary file {}", temp_path.display()))?;
    drop(file);

    std::fs::rename(&temp_path, path).or_else(|err| {
        let _ = std::fs::remove_file(&temp_path);
        Err::<(), _>(err).io_context(|| format!("Unable to replace {}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_existing_content_without_leaving_temp_files() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("HEAD");
        std::fs::write(&target, "old").unwrap();

        write_atomically(&target, b"new").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
