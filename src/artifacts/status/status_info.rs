use crate::areas::repository::Repository;
use crate::artifacts::objects::hashing::digest;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileChange;
use crate::errors::Result;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub type FileSet = BTreeSet<String>;
pub type OidMap = BTreeMap<String, ObjectId>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub staged: FileSet,
    pub modified: FileSet,
    pub untracked: FileSet,
}

impl StatusReport {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty() && self.untracked.is_empty()
    }

    /// Every classified path with its change, grouped staged, modified, untracked
    pub fn changes(&self) -> impl Iterator<Item = (FileChange, &str)> {
        tagged(FileChange::Staged, &self.staged)
            .chain(tagged(FileChange::Modified, &self.modified))
            .chain(tagged(FileChange::Untracked, &self.untracked))
    }
}

fn tagged(change: FileChange, files: &FileSet) -> impl Iterator<Item = (FileChange, &str)> {
    files.iter().map(move |file| (change, file.as_str()))
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl Status<'_> {
    pub fn initialize(&self) -> Result<StatusReport> {
        let staged_oids = self.repository.index().staged_oids()?;
        let committed_oids = self.load_head_tree()?;

        let mut report = StatusReport {
            staged: staged_oids.keys().cloned().collect(),
            ..Default::default()
        };

        for file in self.repository.workspace().list_files()? {
            // a staged path is reported as staged only, whatever its content
            if staged_oids.contains_key(&file) {
                continue;
            }

            match committed_oids.get(&file) {
                Some(committed_oid) => {
                    let content = self.repository.workspace().read_file(&file)?;
                    if &digest(&content) != committed_oid {
                        report.modified.insert(file);
                    }
                }
                None => {
                    report.untracked.insert(file);
                }
            }
        }

        Ok(report)
    }

    fn load_head_tree(&self) -> Result<OidMap> {
        match self.repository.refs().read_head()? {
            Some(head_oid) => {
                let commit = self.repository.database().load_commit(&head_oid)?;
                let tree = self.repository.database().load_tree(commit.tree_oid())?;

                Ok(tree.into_oid_map())
            }
            None => Ok(OidMap::new()),
        }
    }
}
