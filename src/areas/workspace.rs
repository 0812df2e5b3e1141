use crate::errors::{IoContext, RepositoryError, Result};
use bytes::Bytes;
use std::path::{Component, Path};

/// Repository metadata directory at the root of the working tree
pub const METADATA_DIR: &str = ".mygit";

const IGNORED_PATHS: [&str; 3] = [METADATA_DIR, ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Regular files directly inside the working tree root, sorted by name
    ///
    /// Subdirectories are not descended into and the metadata directory is
    /// skipped.
    pub fn list_files(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.path).io_context(|| {
            format!("Unable to list working directory {}", self.path.display())
        })?;

        let mut files = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| match entry.file_name().into_string() {
                Ok(name) => Some(name),
                Err(name) => {
                    tracing::warn!(?name, "skipping file with a non UTF-8 name");
                    None
                }
            })
            .filter(|name| !IGNORED_PATHS.contains(&name.as_str()))
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    pub fn read_file(&self, file_path: &str) -> Result<Bytes> {
        let absolute_path = self.path.join(file_path);

        match std::fs::read(&absolute_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::FileNotFound(absolute_path))
            }
            Err(err) => Err(err).io_context(|| {
                format!("Unable to read file {}", absolute_path.display())
            }),
        }
    }

    /// Turn a user-supplied path into the `/`-separated key used by the index
    ///
    /// Relative paths are taken relative to the working tree root. The path
    /// must name an existing regular file (not a symlink) inside the working
    /// tree and outside the metadata directory. The key keeps the file name
    /// as given; only the parent directory is resolved. Names that are not
    /// UTF-8 or contain line breaks cannot be recorded in the index.
    pub fn stage_path(&self, file_path: &Path) -> Result<String> {
        let unsupported = || RepositoryError::UnsupportedPath(file_path.to_path_buf());
        let absolute_path = if file_path.is_absolute() {
            file_path.to_path_buf()
        } else {
            self.path.join(file_path)
        };

        let metadata = match std::fs::symlink_metadata(&absolute_path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::FileNotFound(file_path.to_path_buf()));
            }
            Err(err) => {
                return Err(err).io_context(|| {
                    format!("Unable to stat file {}", absolute_path.display())
                });
            }
        };

        if !metadata.is_file() {
            return Err(unsupported());
        }

        let (Some(parent), Some(file_name)) = (absolute_path.parent(), absolute_path.file_name())
        else {
            return Err(unsupported());
        };
        let parent = parent.canonicalize().io_context(|| {
            format!("Unable to resolve path {}", parent.display())
        })?;
        let relative_path = parent
            .strip_prefix(&self.path)
            .map(|dir| dir.join(file_name))
            .map_err(|_| unsupported())?;

        let components = relative_path
            .components()
            .map(|component| match component {
                Component::Normal(name) => name
                    .to_str()
                    .filter(|name| !IGNORED_PATHS.contains(name))
                    .filter(|name| !name.contains(['\n', '\r']))
                    .map(str::to_string)
                    .ok_or_else(unsupported),
                _ => Err(unsupported()),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(components.join("/"))
    }
}
