//! Content digest used to address every object
//!
//! Blobs, tree payloads and commit payloads are all hashed the same way:
//! SHA-1 over the exact bytes that get written to the object store, rendered
//! as 40 lowercase hex characters. There is no type header in front of the
//! content, so `digest(b"hi")` is the address of a file containing `hi`.

use crate::artifacts::objects::object_id::ObjectId;
use sha1::{Digest, Sha1};

pub fn digest(data: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(data);

    let oid = hasher.finalize();
    ObjectId::try_parse(format!("{oid:x}"))
        .unwrap_or_else(|_| unreachable!("SHA-1 always renders as 40 hex characters"))
}
