use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::{History, LogEntry};
use crate::errors::Result;
use file_guard::Lock;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Lazy walk of the current branch, newest commit first
    pub fn history(&self) -> Result<History<'_>> {
        self.ensure_initialized()?;

        Ok(History::new(self.database(), self.refs().read_head()?))
    }

    pub fn log(&self) -> Result<Vec<LogEntry>> {
        self.locked(Lock::Shared, || self.history()?.collect())
    }

    /// Print the history; commits before a broken object are still shown
    pub fn show_log(&self, opts: &LogOptions) -> Result<()> {
        self.locked(Lock::Shared, || {
            for entry in self.history()? {
                let entry = entry?;

                if opts.oneline {
                    self.show_commit_oneline(&entry)?;
                } else {
                    self.show_commit_medium(&entry)?;
                }
            }

            Ok(())
        })
    }

    fn show_commit_medium(&self, entry: &LogEntry) -> Result<()> {
        let author = entry.commit.author();

        self.write_line(format_args!("commit {}", entry.oid))?;
        self.write_line(format_args!("Author: {}", author.display_name()))?;
        self.write_line(format_args!("Date:   {}", author.readable_timestamp()))?;
        self.write_line("")?;
        for message_line in entry.commit.message().lines() {
            self.write_line(format_args!("    {message_line}"))?;
        }
        self.write_line("")
    }

    fn show_commit_oneline(&self, entry: &LogEntry) -> Result<()> {
        self.write_line(format_args!(
            "{} {}",
            entry.oid.to_short_oid(),
            entry.commit.short_message()
        ))
    }
}
