//! Staging index entry
//!
//! ## Format
//!
//! One text line per staged path: `<path> <40-hex-oid>\n`. The oid is the
//! last field, so paths may contain spaces.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// Path relative to the working tree root, `/`-separated
    pub path: String,
    /// Digest of the content at the time it was staged
    pub oid: ObjectId,
}

impl IndexEntry {
    pub fn to_line(&self) -> String {
        format!("{} {}\n", self.path, self.oid)
    }

    pub fn parse_line(line: &str) -> Result<Self, String> {
        let (path, oid) = line
            .rsplit_once(' ')
            .ok_or_else(|| "expected `<path> <oid>`".to_string())?;

        if path.is_empty() {
            return Err("empty path".to_string());
        }

        let oid = ObjectId::try_parse(oid).map_err(|err| err.to_string())?;
        Ok(Self::new(path.to_string(), oid))
    }
}
