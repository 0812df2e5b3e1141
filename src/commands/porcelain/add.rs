use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use file_guard::Lock;
use std::path::{Path, PathBuf};

impl Repository {
    /// Store a file's content as a blob and record it in the index
    pub fn add(&self, path: impl AsRef<Path>) -> Result<ObjectId> {
        let mut oids = self.add_all(&[path.as_ref().to_path_buf()])?;

        Ok(oids.remove(0))
    }

    /// Stage several files in order
    ///
    /// Every path is validated and read before anything is written, so a
    /// missing file leaves the index untouched.
    pub fn add_all(&self, paths: &[PathBuf]) -> Result<Vec<ObjectId>> {
        self.locked(Lock::Exclusive, || {
            let blobs = paths
                .iter()
                .map(|path| {
                    let key = self.workspace().stage_path(path)?;
                    let content = self.workspace().read_file(&key)?;

                    Ok((key, Blob::new(content)))
                })
                .collect::<Result<Vec<_>>>()?;

            blobs
                .into_iter()
                .map(|(key, blob)| {
                    let oid = self.database().store(&blob)?;
                    self.index().stage(&IndexEntry::new(key, oid.clone()))?;

                    Ok(oid)
                })
                .collect()
        })
    }
}
