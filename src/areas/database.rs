//! Object database
//!
//! A sharded, content-addressed blob store. Each object lives at
//! `objects/<first 2 hex chars>/<remaining 38 hex chars>` and holds exactly
//! the bytes that were hashed. Objects carry no type tag and are never
//! modified or deleted once written.

use crate::areas::persist::generate_temp_name;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::hashing::digest;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{IoContext, RepositoryError, Result};
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store raw bytes under their digest
    ///
    /// Writing content that is already present is a no-op: identical content
    /// always maps to the identical path and bytes.
    pub fn put(&self, data: &[u8]) -> Result<ObjectId> {
        let oid = digest(data);
        let object_path = self.path.join(oid.to_path());

        if self.contains(&oid) {
            tracing::trace!(%oid, "object already stored");
            return Ok(oid);
        }

        let object_dir = object_path
            .parent()
            .unwrap_or_else(|| unreachable!("object paths always have a shard directory"));
        std::fs::create_dir_all(object_dir).io_context(|| {
            format!("Unable to create object directory {}", object_dir.display())
        })?;

        self.write_object(&object_path, data)?;
        tracing::debug!(%oid, size = data.len(), "stored object");

        Ok(oid)
    }

    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        let oid = self.put(&object.serialize())?;
        tracing::trace!(%oid, kind = %object.object_type(), "stored typed object");

        Ok(oid)
    }

    pub fn get(&self, oid: &ObjectId) -> Result<Bytes> {
        let object_path = self.path.join(oid.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::ObjectNotFound(oid.clone()))
            }
            Err(err) => Err(RepositoryError::ObjectReadFailure {
                oid: oid.clone(),
                reason: err.to_string(),
            }),
        }
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.path.join(oid.to_path()).is_file()
    }

    pub fn load_tree(&self, oid: &ObjectId) -> Result<Tree> {
        self.load(oid)
    }

    pub fn load_commit(&self, oid: &ObjectId) -> Result<Commit> {
        self.load(oid)
    }

    fn load<T: Unpackable>(&self, oid: &ObjectId) -> Result<T> {
        let data = self.get(oid)?;

        T::deserialize(data).map_err(|err| RepositoryError::ObjectReadFailure {
            oid: oid.clone(),
            reason: format!("{err:#}"),
        })
    }

    fn write_object(&self, object_path: &Path, data: &[u8]) -> Result<()> {
        let object_dir = object_path.parent().unwrap_or(&self.path);
        let temp_object_path: PathBuf = object_dir.join(generate_temp_name("obj"));

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .io_context(|| {
                format!(
                    "Unable to open object file {}",
                    temp_object_path.display()
                )
            })?;

        file.write_all(data).io_context(|| {
            format!(
                "Unable to write object file {}",
                temp_object_path.display()
            )
        })?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path).io_context(|| {
            format!("Unable to rename object file to {}", object_path.display())
        })
    }
}
