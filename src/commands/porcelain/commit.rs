use crate::areas::config::Identity;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Author;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use chrono::{DateTime, Utc};
use file_guard::Lock;

/// Identity used when the config has no `[user]` entries
pub const DEFAULT_AUTHOR_NAME: &str = "Unknown Author";
pub const DEFAULT_AUTHOR_EMAIL: &str = "unknown@example.com";

impl Repository {
    pub fn commit(&self, message: &str) -> Result<ObjectId> {
        self.commit_at(message, Utc::now())
    }

    /// Record the staged snapshot as the new tip of the current branch
    ///
    /// The message is stored byte for byte. The index is cleared only after
    /// the commit object and the ref have been written.
    pub fn commit_at(&self, message: &str, timestamp: DateTime<Utc>) -> Result<ObjectId> {
        self.locked(Lock::Exclusive, || {
            let tree_oid = self.write_tree()?;

            let branch = self.refs().current_branch()?;
            let parent = self.refs().read_tip(&branch)?;
            let author = self.load_author(timestamp)?;

            let commit_oid = self.write_commit(tree_oid, parent, author, message)?;
            self.refs().write_tip(&branch, &commit_oid)?;
            self.index().clear()?;

            tracing::info!(%branch, oid = %commit_oid, "created commit");
            Ok(commit_oid)
        })
    }

    pub fn show_commit(&self, commit_oid: &ObjectId) -> Result<()> {
        let commit = self.database().load_commit(commit_oid)?;
        let is_root = if commit.is_root() {
            " (root-commit)"
        } else {
            ""
        };

        self.write_line(format_args!(
            "[{}{} {}] {}",
            self.refs().current_branch()?,
            is_root,
            commit_oid.to_short_oid(),
            commit.short_message()
        ))
    }

    fn load_author(&self, timestamp: DateTime<Utc>) -> Result<Author> {
        let Identity { name, email } = self.config().identity()?;

        if name.is_none() || email.is_none() {
            tracing::debug!("author identity not configured, using defaults");
        }

        Ok(Author::new(
            name.unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string()),
            email.unwrap_or_else(|| DEFAULT_AUTHOR_EMAIL.to_string()),
            timestamp,
        ))
    }
}
