//! References (HEAD and branch tips)
//!
//! Only one line of history is tracked. `HEAD` names the current branch
//! symbolically and `refs/heads/<branch>` holds that branch's tip commit.
//!
//! ## File Format
//!
//! - `HEAD`: `ref: refs/heads/<branch>\n`
//! - `refs/heads/<branch>`: the 40-character tip commit hash; absent or empty
//!   while the branch has no commits

use crate::areas::persist::write_atomically;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{IoContext, RepositoryError, Result};
use derive_new::new;
use std::path::{Path, PathBuf};

/// Regex pattern for parsing the symbolic HEAD reference
const SYMREF_REGEX: &str = r"^ref: refs/heads/(\S+)$";

pub const HEAD_REF_NAME: &str = "HEAD";

/// Branch created by `init` and used whenever HEAD cannot be read
pub const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (typically `.mygit`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    pub fn tags_path(&self) -> PathBuf {
        self.refs_path().join("tags")
    }

    /// Point HEAD at a branch
    pub fn set_head(&self, branch: &str) -> Result<()> {
        write_atomically(
            &self.head_path(),
            format!("ref: refs/heads/{branch}\n").as_bytes(),
        )
    }

    /// Name of the branch HEAD points at
    pub fn current_branch(&self) -> Result<String> {
        let head_path = self.head_path();
        let content = match std::fs::read_to_string(&head_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(DEFAULT_BRANCH.to_string());
            }
            Err(err) => {
                return Err(err).io_context(|| {
                    format!("Unable to read HEAD at {}", head_path.display())
                });
            }
        };

        let symref = regex::Regex::new(SYMREF_REGEX)
            .unwrap_or_else(|err| unreachable!("invalid symref pattern: {err}"));

        match symref.captures(content.trim()) {
            Some(captures) => Ok(captures[1].to_string()),
            None => {
                tracing::warn!(head = content.trim(), "unrecognized HEAD, using default branch");
                Ok(DEFAULT_BRANCH.to_string())
            }
        }
    }

    /// Tip commit of a branch, or None before its first commit
    pub fn read_tip(&self, branch: &str) -> Result<Option<ObjectId>> {
        let ref_path = self.heads_path().join(branch);

        let content = match std::fs::read_to_string(&ref_path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).io_context(|| {
                    format!("Unable to read ref file {}", ref_path.display())
                });
            }
        };

        let content = content.trim();
        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content)
            .map(Some)
            .map_err(|err| RepositoryError::CorruptRef {
                path: ref_path,
                reason: err.to_string(),
            })
    }

    /// Overwrite a branch tip
    pub fn write_tip(&self, branch: &str, oid: &ObjectId) -> Result<()> {
        let ref_path = self.heads_path().join(branch);

        if let Some(parent) = ref_path.parent() {
            std::fs::create_dir_all(parent).io_context(|| {
                format!("Unable to create refs directory {}", parent.display())
            })?;
        }

        write_atomically(&ref_path, format!("{oid}\n").as_bytes())?;
        tracing::debug!(branch, %oid, "updated branch tip");

        Ok(())
    }

    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        self.read_tip(&self.current_branch()?)
    }
}
