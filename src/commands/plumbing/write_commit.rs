use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{RepositoryError, Result};

impl Repository {
    /// Store a commit object linking a tree to an optional parent
    ///
    /// Refs are left untouched.
    pub fn write_commit(
        &self,
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        author: Author,
        message: &str,
    ) -> Result<ObjectId> {
        let commit = Commit::new(tree_oid, parent, author, message.to_string());

        self.database().store(&commit)
    }

    /// Build a flat tree from the staged entries and store it
    pub fn write_tree(&self) -> Result<ObjectId> {
        let entries = self.index().resolved_entries()?;
        let tree = Tree::build(&entries);

        if tree.is_empty() {
            return Err(RepositoryError::NothingToCommit);
        }

        self.database().store(&tree)
    }
}
