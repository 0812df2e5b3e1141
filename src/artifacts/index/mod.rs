//! Staging index data structures
//!
//! The on-disk index is an append-only log, so a path staged twice appears
//! twice. [`resolve_entries`] collapses the log into one entry per path.

use crate::artifacts::index::index_entry::IndexEntry;
use std::collections::HashMap;

pub mod index_entry;

/// Collapse duplicate paths: the last staged hash wins
///
/// Paths keep the position at which they were first staged.
pub fn resolve_entries(entries: impl IntoIterator<Item = IndexEntry>) -> Vec<IndexEntry> {
    let mut resolved = Vec::<IndexEntry>::new();
    let mut positions = HashMap::<String, usize>::new();

    for entry in entries {
        match positions.get(&entry.path) {
            Some(&position) => resolved[position].oid = entry.oid,
            None => {
                positions.insert(entry.path.clone(), resolved.len());
                resolved.push(entry);
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::hashing::digest;
    use pretty_assertions::assert_eq;

    #[test]
    fn last_staged_hash_wins_and_first_position_is_kept() {
        let entries = vec![
            IndexEntry::new("a.txt".to_string(), digest(b"1")),
            IndexEntry::new("b.txt".to_string(), digest(b"2")),
            IndexEntry::new("a.txt".to_string(), digest(b"3")),
        ];

        assert_eq!(
            resolve_entries(entries),
            vec![
                IndexEntry::new("a.txt".to_string(), digest(b"3")),
                IndexEntry::new("b.txt".to_string(), digest(b"2")),
            ]
        );
    }
}
