use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{METADATA_DIR, Workspace};
use crate::errors::{IoContext, RepositoryError, Result};
use file_guard::Lock;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Advisory lock file held for the duration of one command
const LOCK_FILE: &str = "lock";

/// Handle on one repository
///
/// Every operation goes through a handle, so independent repositories can
/// live side by side in the same process.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Index,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    config: Config,
}

impl Repository {
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            std::fs::create_dir_all(path)
                .io_context(|| format!("Unable to create directory {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .io_context(|| format!("Unable to resolve directory {}", path.display()))?;
        let metadata_path = path.join(METADATA_DIR);

        Ok(Repository {
            index: Index::new(metadata_path.join("index").into_boxed_path()),
            database: Database::new(metadata_path.join("objects").into_boxed_path()),
            refs: Refs::new(metadata_path.clone().into_boxed_path()),
            config: Config::new(metadata_path.join("config").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            writer: RefCell::new(writer),
            path: path.into_boxed_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> Box<Path> {
        self.path.join(METADATA_DIR).into_boxed_path()
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Write one line of command output
    pub fn write_line(&self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.writer(), "{line}").io_context(|| "Unable to write command output")
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A repository exists once its metadata directory and object store do
    pub fn is_initialized(&self) -> bool {
        self.database.objects_path().is_dir()
    }

    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::NotARepository(self.path.to_path_buf()))
        }
    }

    /// Run an operation while holding the repository-wide advisory lock
    ///
    /// Mutating commands take the lock exclusively, read-only ones shared.
    pub(crate) fn locked<T>(&self, lock: Lock, operation: impl FnOnce() -> Result<T>) -> Result<T> {
        self.ensure_initialized()?;

        let exclusive = matches!(lock, Lock::Exclusive);
        let lock_path = self.metadata_path().join(LOCK_FILE);
        let mut lock_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .io_context(|| format!("Unable to open lock file {}", lock_path.display()))?;
        let _guard = file_guard::lock(&mut lock_file, lock, 0, 1)
            .io_context(|| format!("Unable to lock {}", lock_path.display()))?;
        tracing::trace!(exclusive, "acquired repository lock");

        operation()
    }
}
