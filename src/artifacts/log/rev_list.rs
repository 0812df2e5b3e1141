use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use derive_new::new;

/// A commit together with the ID it was loaded from
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogEntry {
    pub oid: ObjectId,
    pub commit: Commit,
}

/// Lazy walk from a tip commit to the root, newest first
///
/// The walk ends after the parent-less root commit. If a commit cannot be
/// loaded the error is yielded once and the walk stops.
#[derive(Clone)]
pub struct History<'r> {
    database: &'r Database,
    next_oid: Option<ObjectId>,
}

impl<'r> History<'r> {
    pub fn new(database: &'r Database, tip: Option<ObjectId>) -> Self {
        History {
            database,
            next_oid: tip,
        }
    }
}

impl Iterator for History<'_> {
    type Item = Result<LogEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.next_oid.take()?;

        match self.database.load_commit(&commit_oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.next_oid = commit.parent().cloned();
                Some(Ok(LogEntry::new(commit_oid, commit)))
            }
            Err(err) => {
                tracing::warn!(oid = %commit_oid, error = %err, "history walk stopped");
                Some(Err(err))
            }
        }
    }
}
