//! Blob object
//!
//! Blobs store the raw bytes of one staged file. No metadata, no header:
//! the serialized form is the content itself, so the blob's ID is the
//! digest of the file.

use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        self.content.clone()
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::hashing::digest;

    #[test]
    fn blob_id_is_the_digest_of_its_content() {
        let blob = Blob::new(Bytes::from_static(b"hi"));

        assert_eq!(blob.serialize().as_ref(), b"hi");
        assert_eq!(blob.object_id(), digest(b"hi"));
    }
}
