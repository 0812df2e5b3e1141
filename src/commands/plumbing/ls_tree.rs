use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::TreeEntry;
use crate::errors::{RepositoryError, Result};

impl Repository {
    /// Entries of a tree, given `HEAD`, a commit ID or a tree ID
    ///
    /// Objects carry no type tag, so an ID is first read as a commit and,
    /// failing that, as a tree.
    pub fn ls_tree(&self, tree_ish: &str) -> Result<Vec<TreeEntry>> {
        self.locked(file_guard::Lock::Shared, || {
            let oid = if tree_ish == HEAD_REF_NAME {
                self.refs()
                    .read_head()?
                    .ok_or_else(|| RepositoryError::InvalidObjectId(tree_ish.to_string()))?
            } else {
                ObjectId::try_parse(tree_ish)?
            };

            let tree_oid = match self.database().load_commit(&oid) {
                Ok(commit) => commit.tree_oid().clone(),
                Err(RepositoryError::ObjectReadFailure { .. }) => oid,
                Err(err) => return Err(err),
            };

            Ok(self.database().load_tree(&tree_oid)?.entries().to_vec())
        })
    }

    pub fn show_ls_tree(&self, tree_ish: &str) -> Result<()> {
        for entry in self.ls_tree(tree_ish)? {
            self.write_line(format_args!("{} {} {}", entry.mode, entry.oid, entry.name))?;
        }

        Ok(())
    }
}
