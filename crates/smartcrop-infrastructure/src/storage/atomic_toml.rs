//! Crash-safe, lock-protected TOML files.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Serialize, de::DeserializeOwned};
use smartcrop_core::AdvisoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtomicTomlError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Lock error on {path}: {message}")]
    Lock { path: PathBuf, message: String },
}

impl From<AtomicTomlError> for AdvisoryError {
    fn from(err: AtomicTomlError) -> Self {
        match err {
            AtomicTomlError::Io { .. } | AtomicTomlError::Lock { .. } => {
                AdvisoryError::io(err.to_string())
            }
            AtomicTomlError::Parse { .. } | AtomicTomlError::Serialize(_) => {
                AdvisoryError::Serialization {
                    format: "TOML".to_string(),
                    message: err.to_string(),
                }
            }
        }
    }
}

/// A TOML document on disk, replaced atomically on every write.
///
/// - Writes go to a sibling temp file, are fsynced, then renamed over the target.
/// - [`AtomicTomlFile::update`] holds an exclusive lock on a sibling `.lock` file for the
///   whole read-modify-write, so concurrent updaters in this or another process are
///   serialized and none of their changes are lost.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document. A missing or blank file yields `Ok(None)`.
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| AtomicTomlError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Like [`AtomicTomlFile::load`], but an unparseable document is logged and read as
    /// absent.
    pub fn load_lenient(&self) -> Result<Option<T>, AtomicTomlError> {
        match self.load() {
            Err(AtomicTomlError::Parse { path, source }) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %source,
                    "Unreadable TOML file, treating it as empty"
                );
                Ok(None)
            }
            other => other,
        }
    }

    /// Replaces the document with `data`.
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        self.ensure_parent()?;

        let rendered = toml::to_string_pretty(data)?;
        let tmp_path = self.sibling(".tmp");

        let mut tmp = File::create(&tmp_path).map_err(|e| self.io_error(e))?;
        tmp.write_all(rendered.as_bytes())
            .and_then(|_| tmp.sync_all())
            .map_err(|e| self.io_error(e))?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))
    }

    /// Locked read-modify-write. A missing file starts from `T::default()`.
    ///
    /// The closure's return value is passed through.
    pub fn update<R, F>(&self, f: F) -> Result<R, AtomicTomlError>
    where
        T: Default,
        F: FnOnce(&mut T) -> R,
    {
        let _lock = self.lock()?;

        let mut data = self.load()?.unwrap_or_default();
        let result = f(&mut data);
        self.save(&data)?;

        Ok(result)
    }

    /// [`AtomicTomlFile::update`] that starts from `T::default()` when the document does
    /// not parse, so the write replaces it.
    pub fn update_lenient<R, F>(&self, f: F) -> Result<R, AtomicTomlError>
    where
        T: Default,
        F: FnOnce(&mut T) -> R,
    {
        let _lock = self.lock()?;

        let mut data = self.load_lenient()?.unwrap_or_default();
        let result = f(&mut data);
        self.save(&data)?;

        Ok(result)
    }

    fn lock(&self) -> Result<LockGuard, AtomicTomlError> {
        self.ensure_parent()?;
        let lock_path = self.sibling(".lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| self.io_error(e))?;

        file.lock_exclusive().map_err(|e| AtomicTomlError::Lock {
            path: lock_path,
            message: e.to_string(),
        })?;

        Ok(LockGuard { file })
    }

    fn ensure_parent(&self) -> Result<(), AtomicTomlError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))
            }
            _ => Ok(()),
        }
    }

    /// `dir/.name.suffix` for `dir/name`.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "state".to_string());
        self.path.with_file_name(format!(".{name}{suffix}"))
    }

    fn io_error(&self, source: std::io::Error) -> AtomicTomlError {
        AtomicTomlError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Releases the exclusive lock when dropped.
///
/// The lock file itself stays on disk; deleting it would let a waiter lock an
/// unlinked inode while a newcomer locks a fresh one.
struct LockGuard {
    file: File,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
