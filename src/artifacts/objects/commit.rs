//! Commit object
//!
//! Commits link a tree snapshot, at most one parent commit, author metadata
//! and a message into a singly linked history.
//!
//! ## Format
//!
//! ```text
//! tree <tree-oid>
//! parent <parent-oid>        (absent on the root commit)
//! author <name> <<email>> <unix-timestamp>
//!
//! <message>
//! ```
//!
//! Every line, including the last message line, is terminated by `\n`.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, Utc};

/// Author identity plus the moment the commit was recorded
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: DateTime<Utc>,
}

impl Author {
    pub fn new(name: String, email: String, timestamp: DateTime<Utc>) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// "Name <email> timestamp", as written on the author line
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {}",
            self.name,
            self.email,
            self.timestamp.timestamp()
        )
    }

    /// Human-readable form, like "Mon Jan 2 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}

impl TryFrom<&str> for Author {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // the timestamp is the last space-separated field
        let (name_email, timestamp) = value
            .rsplit_once(' ')
            .context("Invalid author format: missing timestamp")?;
        let timestamp = timestamp
            .parse::<i64>()
            .context("Invalid author format: timestamp is not a number")?;
        let timestamp =
            DateTime::from_timestamp(timestamp, 0).context("Invalid author timestamp")?;

        let email_start = name_email
            .find('<')
            .context("Invalid author format: missing '<'")?;
        let email_end = name_email
            .rfind('>')
            .filter(|end| *end > email_start)
            .context("Invalid author format: missing '>'")?;

        Ok(Author {
            name: name_email[..email_start].trim_end().to_string(),
            email: name_email[email_start + 1..email_end].to_string(),
            timestamp,
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    tree_oid: ObjectId,
    /// None for the root commit
    parent: Option<ObjectId>,
    author: Author,
    message: String,
}

impl Commit {
    pub fn new(
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        author: Author,
        message: String,
    ) -> Self {
        Commit {
            tree_oid,
            parent,
            author,
            message,
        }
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message, for one-line displays
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        let mut content = format!("tree {}\n", self.tree_oid);
        if let Some(parent) = &self.parent {
            content.push_str(&format!("parent {parent}\n"));
        }
        content.push_str(&format!("author {}\n", self.author.display()));
        content.push('\n');
        content.push_str(&self.message);
        content.push('\n');

        Bytes::from(content)
    }
}

impl Unpackable for Commit {
    fn deserialize(data: Bytes) -> anyhow::Result<Self> {
        let content = String::from_utf8(data.to_vec()).context("Invalid commit object: not UTF-8")?;
        let (headers, body) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing blank line before message")?;
        let mut lines = headers.lines();

        let tree_oid = lines
            .next()
            .and_then(|line| line.strip_prefix("tree "))
            .context("Invalid commit object: invalid tree line")?;
        let tree_oid = ObjectId::try_parse(tree_oid)?;

        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing author line")?;

        let parent = match next_line.strip_prefix("parent ") {
            Some(parent) => {
                next_line = lines
                    .next()
                    .context("Invalid commit object: missing author line")?;
                Some(ObjectId::try_parse(parent)?)
            }
            None => None,
        };

        let author = next_line
            .strip_prefix("author ")
            .context("Invalid commit object: invalid author line")?;
        let author = Author::try_from(author)?;

        if let Some(extra) = lines.next() {
            anyhow::bail!("Invalid commit object: unexpected header line {extra:?}");
        }

        let message = body.strip_suffix('\n').unwrap_or(body).to_string();
        Ok(Self::new(tree_oid, parent, author, message))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
