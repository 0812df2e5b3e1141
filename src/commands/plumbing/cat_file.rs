use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{IoContext, Result};
use bytes::Bytes;
use std::io::Write;

impl Repository {
    /// Raw bytes of any stored object
    pub fn cat_file(&self, object_id: &str) -> Result<Bytes> {
        self.ensure_initialized()?;

        let oid = ObjectId::try_parse(object_id)?;
        self.database().get(&oid)
    }

    pub fn show_cat_file(&self, object_id: &str) -> Result<()> {
        let content = self.cat_file(object_id)?;

        self.writer()
            .write_all(&content)
            .io_context(|| "Unable to write command output")
    }
}
