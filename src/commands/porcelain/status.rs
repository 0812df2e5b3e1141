use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::{Status, StatusReport};
use crate::errors::Result;
use file_guard::Lock;

// Terminology:
// - staged files: files recorded in the index since the last commit
// - modified files: files of the last commit whose working content differs
// - untracked files: files that are neither staged nor committed
impl Repository {
    pub fn status(&self) -> Result<StatusReport> {
        self.locked(Lock::Shared, || Status::new(self).initialize())
    }

    pub fn show_status(&self, colored: bool) -> Result<()> {
        let report = self.status()?;

        for (change, file) in report.changes() {
            let label = if colored {
                change.colored_label()
            } else {
                change.label().to_string()
            };

            self.write_line(format_args!("{label} {file}"))?;
        }

        Ok(())
    }
}
