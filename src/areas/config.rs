//! Repository configuration
//!
//! A small INI-style file of `[section]` headers followed by `key = value`
//! lines. The core only ever reads the author identity from the `[user]`
//! section; the `[core]` block written by `init` is informational.
//!
//! ```text
//! [core]
//!     repositoryformatversion = 0
//! [user]
//!     name = Ada Lovelace
//!     email = ada@example.com
//! ```

use crate::areas::persist::write_atomically;
use crate::errors::{IoContext, Result};
use derive_new::new;
use regex::Regex;
use std::path::Path;

const SECTION_REGEX: &str = r"^\[\s*([A-Za-z0-9.-]+)\s*\]$";
const ENTRY_REGEX: &str = r"^([A-Za-z][A-Za-z0-9-]*)\s*=\s*(.*)$";

const USER_SECTION: &str = "user";

/// Author identity as configured; either half may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct Config {
    path: Box<Path>,
}

impl Config {
    pub fn new(path: Box<Path>) -> Self {
        Config { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Content written by `init`
    pub fn initial_content() -> String {
        [
            "[core]",
            "    repositoryformatversion = 0",
            "    filemode = true",
            "    bare = false",
            "",
        ]
        .join("\n")
    }

    pub fn identity(&self) -> Result<Identity> {
        let sections = self.read_sections()?;

        Ok(Identity {
            name: Self::lookup(&sections, USER_SECTION, "name"),
            email: Self::lookup(&sections, USER_SECTION, "email"),
        })
    }

    pub fn get(&self, section: &str, key: &str) -> Result<Option<String>> {
        Ok(Self::lookup(&self.read_sections()?, section, key))
    }

    /// Insert or replace one entry, keeping every other section intact
    pub fn set(&self, section: &str, key: &str, value: &str) -> Result<()> {
        let mut sections = self.read_sections()?;

        let target = match sections.iter().position(|s| s.name.eq_ignore_ascii_case(section)) {
            Some(position) => &mut sections[position],
            None => {
                sections.push(Section::new(section.to_string(), Vec::new()));
                sections.last_mut().unwrap_or_else(|| unreachable!())
            }
        };

        match target
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(key))
        {
            Some((_, existing_value)) => *existing_value = value.trim().to_string(),
            None => target
                .entries
                .push((key.to_string(), value.trim().to_string())),
        }

        write_atomically(&self.path, Self::render(&sections).as_bytes())?;
        tracing::debug!(section, key, "updated config entry");

        Ok(())
    }

    pub fn set_author_name(&self, name: &str) -> Result<()> {
        self.set(USER_SECTION, "name", name)
    }

    pub fn set_author_email(&self, email: &str) -> Result<()> {
        self.set(USER_SECTION, "email", email)
    }

    fn lookup(sections: &[Section], section: &str, key: &str) -> Option<String> {
        sections
            .iter()
            .filter(|s| s.name.eq_ignore_ascii_case(section))
            .flat_map(|s| s.entries.iter())
            .filter(|(existing, _)| existing.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.clone())
            .last()
            .filter(|value| !value.is_empty())
    }

    fn read_sections(&self) -> Result<Vec<Section>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err).io_context(|| {
                    format!("Unable to read config file {}", self.path.display())
                });
            }
        };

        Ok(Self::parse(&content))
    }

    fn parse(content: &str) -> Vec<Section> {
        let section_regex =
            Regex::new(SECTION_REGEX).unwrap_or_else(|err| unreachable!("{err}"));
        let entry_regex = Regex::new(ENTRY_REGEX).unwrap_or_else(|err| unreachable!("{err}"));

        let mut sections = Vec::<Section>::new();

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(captures) = section_regex.captures(line) {
                sections.push(Section::new(captures[1].to_string(), Vec::new()));
            } else if let Some(captures) = entry_regex.captures(line)
                && let Some(section) = sections.last_mut()
            {
                section
                    .entries
                    .push((captures[1].to_string(), captures[2].trim().to_string()));
            } else {
                tracing::warn!(line, "ignoring unrecognized config line");
            }
        }

        sections
    }

    fn render(sections: &[Section]) -> String {
        let mut content = String::new();

        for section in sections {
            content.push_str(&format!("[{}]\n", section.name));
            for (key, value) in &section.entries {
                content.push_str(&format!("    {key} = {value}\n"));
            }
        }

        content
    }
}
