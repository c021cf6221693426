//! File-backed [`KeyValueStore`]: one `<key>.json` file per key.
//!
//! The directory is created and checked once when the store opens. Each save
//! writes a temp file beside the target and renames it over the old value, so
//! a crash mid-write leaves the previous value intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pokedex_core::{KeyValueStore, StoreError};
use pokedex_logging::pokedex_debug;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{path:?} is not a directory")]
    NotADirectory { path: PathBuf },
    #[error("cannot use data directory {path:?}: {source}")]
    DataDir { path: PathBuf, source: io::Error },
    #[error("invalid key {0:?}")]
    InvalidKey(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store in `dir`, creating the directory when missing.
    ///
    /// Fails when `dir` is a file or no file can be created inside it.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        let data_dir_error = |source: io::Error| PersistError::DataDir {
            path: dir.clone(),
            source,
        };
        match fs::metadata(&dir) {
            Ok(meta) if !meta.is_dir() => {
                return Err(PersistError::NotADirectory { path: dir.clone() });
            }
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&dir).map_err(data_dir_error)?;
            }
            Err(err) => return Err(data_dir_error(err)),
        }
        // Permission bits do not tell the whole story (read-only mounts, ACLs).
        NamedTempFile::new_in(&dir).map_err(data_dir_error)?;
        pokedex_debug!("File store opened at {:?}", dir);
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, PersistError> {
        let plain = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !plain {
            return Err(PersistError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn replace(&self, target: &Path, content: &str) -> Result<(), PersistError> {
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(target).map_err(|err| err.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self
            .path_for(key)
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Unavailable(format!("{}: {err}", path.display()))),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.path_for(key)
            .and_then(|path| self.replace(&path, value))
            .map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}
