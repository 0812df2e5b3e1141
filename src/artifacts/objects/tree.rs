//! Tree object
//!
//! A tree is the flat snapshot of the staging index at commit time: one
//! entry per staged path, no nested subtrees.
//!
//! ## Format
//!
//! One line per entry: `<mode> <name>\0<40-hex-oid>\n`

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::resolve_entries;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeMap;
use std::io::{BufRead, Cursor, Read};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub mode: EntryMode,
    pub name: String,
    pub oid: ObjectId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Build a tree from staged index entries
    ///
    /// Every entry becomes a regular-file entry named after its path. When a
    /// path was staged more than once the last staged hash is used, so names
    /// are unique within the tree.
    pub fn build<'e>(entries: impl IntoIterator<Item = &'e IndexEntry>) -> Self {
        let entries = resolve_entries(entries.into_iter().cloned())
            .into_iter()
            .map(|entry| TreeEntry::new(EntryMode::Regular, entry.path, entry.oid))
            .collect();

        Tree { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map every entry name to the object it references
    pub fn into_oid_map(self) -> BTreeMap<String, ObjectId> {
        self.entries
            .into_iter()
            .map(|entry| (entry.name, entry.oid))
            .collect()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        let mut tree_bytes = Vec::new();

        for entry in &self.entries {
            tree_bytes.extend_from_slice(format!("{} {}\0", entry.mode, entry.name).as_bytes());
            tree_bytes.extend_from_slice(entry.oid.as_ref().as_bytes());
            tree_bytes.push(b'\n');
        }

        Bytes::from(tree_bytes)
    }
}

impl Unpackable for Tree {
    fn deserialize(data: Bytes) -> anyhow::Result<Self> {
        let mut reader = Cursor::new(data);
        let mut entries = Vec::new();

        loop {
            let mut header = Vec::new();
            reader.read_until(b'\0', &mut header)?;

            if header.is_empty() {
                break;
            }
            if header.pop() != Some(b'\0') {
                anyhow::bail!("Invalid tree entry: missing NUL separator");
            }

            let header = String::from_utf8(header).context("Invalid tree entry: header is not UTF-8")?;
            let (mode, name) = header
                .split_once(' ')
                .context("Invalid tree entry: missing space between mode and name")?;

            let mut oid = [0; OBJECT_ID_LENGTH + 1];
            reader
                .read_exact(&mut oid)
                .context("Invalid tree entry: truncated object id")?;
            if oid[OBJECT_ID_LENGTH] != b'\n' {
                anyhow::bail!("Invalid tree entry: missing line terminator");
            }
            let oid = std::str::from_utf8(&oid[..OBJECT_ID_LENGTH])
                .context("Invalid tree entry: object id is not UTF-8")?;

            entries.push(TreeEntry::new(
                EntryMode::try_from(mode)?,
                name.to_string(),
                ObjectId::try_parse(oid)?,
            ));
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::hashing::digest;
    use pretty_assertions::assert_eq;

    fn staged(path: &str, content: &[u8]) -> IndexEntry {
        IndexEntry::new(path.to_string(), digest(content))
    }

    #[test]
    fn serializes_one_line_per_entry() {
        let tree = Tree::build(&[staged("a.txt", b"a")]);

        let expected = format!("100644 a.txt\0{}\n", digest(b"a"));
        assert_eq!(tree.serialize(), Bytes::from(expected));
    }

    #[test]
    fn reparses_written_entries_with_regular_mode() {
        let entries = [staged("a.txt", b"one"), staged("b.txt", b"two")];
        let tree = Tree::build(&entries);

        let parsed = Tree::deserialize(tree.serialize()).unwrap();

        assert_eq!(
            parsed.entries(),
            &[
                TreeEntry::new(EntryMode::Regular, "a.txt".to_string(), digest(b"one")),
                TreeEntry::new(EntryMode::Regular, "b.txt".to_string(), digest(b"two")),
            ]
        );
        assert!(parsed.entries().iter().all(|e| e.mode.as_str() == "100644"));
    }

    #[test]
    fn last_staged_hash_wins_for_duplicate_paths() {
        let entries = [
            staged("a.txt", b"first"),
            staged("b.txt", b"other"),
            staged("a.txt", b"second"),
        ];

        let tree = Tree::build(&entries);

        assert_eq!(
            tree.into_oid_map(),
            BTreeMap::from([
                ("a.txt".to_string(), digest(b"second")),
                ("b.txt".to_string(), digest(b"other")),
            ])
        );
    }

    #[test]
    fn names_with_spaces_survive_a_round_trip() {
        let tree = Tree::build(&[staged("my notes.txt", b"x")]);

        let parsed = Tree::deserialize(tree.serialize()).unwrap();

        assert_eq!(parsed.entries()[0].name, "my notes.txt");
    }

    #[test]
    fn parses_executable_and_rejects_unknown_modes() {
        let payload = format!("100755 run.sh\0{}\n", digest(b"#!/bin/sh"));

        let parsed = Tree::deserialize(Bytes::from(payload)).unwrap();
        assert_eq!(parsed.entries()[0].mode, EntryMode::Executable);

        let payload = format!("040000 dir\0{}\n", digest(b"dir"));
        assert!(Tree::deserialize(Bytes::from(payload)).is_err());
    }

    #[test]
    fn empty_payload_is_an_empty_tree() {
        assert!(Tree::deserialize(Bytes::new()).unwrap().is_empty());
    }

    #[test]
    fn rejects_truncated_payloads() {
        let payload = Bytes::from_static(b"100644 a.txt\0c22b5f91");

        assert!(Tree::deserialize(payload).is_err());
    }
}
