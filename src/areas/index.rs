//! Staging index
//!
//! The index records which content is pending for the next commit. It is a
//! text log with one `<path> <oid>` line per `add`; re-staging a path appends
//! a new line instead of replacing the old one. Readers collapse the log with
//! "last staged hash wins" (see [`resolve_entries`]). A successful commit
//! truncates the log.

use crate::areas::persist::write_atomically;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::resolve_entries;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{IoContext, RepositoryError, Result};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.mygit/index`)
    path: Box<Path>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one staged record to the log
    pub fn stage(&self, entry: &IndexEntry) -> Result<()> {
        let mut content = self.read_log()?;
        content.push_str(&entry.to_line());

        write_atomically(&self.path, content.as_bytes())?;
        tracing::debug!(path = %entry.path, oid = %entry.oid, "staged entry");

        Ok(())
    }

    /// Every record of the log, in staging order, duplicates included
    pub fn entries(&self) -> Result<Vec<IndexEntry>> {
        self.read_log()?
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(number, line)| {
                IndexEntry::parse_line(line).map_err(|reason| RepositoryError::CorruptIndex {
                    line: number + 1,
                    reason,
                })
            })
            .collect()
    }

    /// One entry per path, holding the last staged hash
    pub fn resolved_entries(&self) -> Result<Vec<IndexEntry>> {
        Ok(resolve_entries(self.entries()?))
    }

    pub fn staged_oids(&self) -> Result<BTreeMap<String, ObjectId>> {
        Ok(self
            .resolved_entries()?
            .into_iter()
            .map(|entry| (entry.path, entry.oid))
            .collect())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.entries()?.is_empty())
    }

    /// Truncate the log; only called once a commit has been recorded
    pub fn clear(&self) -> Result<()> {
        write_atomically(&self.path, b"")?;
        tracing::debug!(index = %self.path.display(), "cleared index");

        Ok(())
    }

    fn read_log(&self) -> Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(err).io_context(|| {
                format!("Unable to read index file {}", self.path.display())
            }),
        }
    }
}
