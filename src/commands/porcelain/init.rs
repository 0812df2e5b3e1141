use crate::areas::config::Config;
use crate::areas::persist::write_atomically;
use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::errors::{IoContext, Result};
use std::fs;

impl Repository {
    /// Create the metadata directory layout
    ///
    /// Returns false, touching nothing, when the repository already exists.
    pub fn init(&self) -> Result<bool> {
        let metadata_path = self.metadata_path();

        if metadata_path.exists() {
            tracing::info!(path = %metadata_path.display(), "repository already initialized");
            return Ok(false);
        }

        for dir in [
            self.database().objects_path().to_path_buf(),
            self.refs().heads_path(),
            self.refs().tags_path(),
        ] {
            fs::create_dir_all(&dir)
                .io_context(|| format!("Failed to create directory {}", dir.display()))?;
        }

        self.refs().set_head(DEFAULT_BRANCH)?;
        write_atomically(self.config().path(), Config::initial_content().as_bytes())?;

        tracing::info!(path = %metadata_path.display(), "initialized repository");
        Ok(true)
    }

    pub fn show_init(&self, created: bool) -> Result<()> {
        let prefix = if created {
            "Initialized empty"
        } else {
            "Reinitialized existing"
        };

        self.write_line(format_args!(
            "{prefix} MyGit repository in {}",
            self.metadata_path().display()
        ))
    }
}
