use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, Result};
use bytes::Bytes;
use std::path::Path;

impl Repository {
    /// Digest a file's bytes, optionally storing them as a blob
    ///
    /// Hashing alone works outside of a repository; writing needs one.
    pub fn hash_object(&self, object_path: &Path, write: bool) -> Result<ObjectId> {
        let object_data = std::fs::read(object_path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => RepositoryError::FileNotFound(object_path.to_path_buf()),
            _ => RepositoryError::Io {
                context: format!("Unable to read file {}", object_path.display()),
                source: err,
            },
        })?;
        let blob = Blob::new(Bytes::from(object_data));

        if !write {
            return Ok(blob.object_id());
        }

        self.locked(file_guard::Lock::Exclusive, || self.database().store(&blob))
    }

    pub fn show_hash_object(&self, object_path: &Path, write: bool) -> Result<()> {
        let oid = self.hash_object(object_path, write)?;

        self.write_line(oid)
    }
}
