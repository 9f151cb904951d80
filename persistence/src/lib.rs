//! File persistence helpers operating on arbitrary absolute paths.
//!
//! Every operation is a thin delegation to [`std::fs`], guarded against
//! empty inputs. Writes and moves create missing parent directories before
//! touching the destination.

#![warn(missing_docs)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use futures::channel::oneshot;
use log::{debug, warn};
use thiserror::Error;

/// Errors that can occur when persisting or retrieving files.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Invalid input (e.g. an empty path or empty payload).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The underlying filesystem call failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias for persistence results.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Write data to an absolute path.
///
/// Missing parent directories of `path` are created first.
///
/// # Errors
/// Returns [`PersistenceError::InvalidInput`] if `data` or `path` is empty,
/// or [`PersistenceError::Io`] if the directory creation or write fails.
pub fn write(data: &[u8], path: impl AsRef<Path>) -> PersistenceResult<()> {
    let path = path.as_ref();

    if data.is_empty() {
        return Err(PersistenceError::InvalidInput("data cannot be empty".into()));
    }
    if path.as_os_str().is_empty() {
        return Err(PersistenceError::InvalidInput("path cannot be empty".into()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_directory(parent)?;
        }
    }

    fs::write(path, data)?;
    Ok(())
}

/// Retrieve the contents of the file at an absolute path.
///
/// # Errors
/// Returns [`PersistenceError::InvalidInput`] if `path` is empty, or
/// [`PersistenceError::Io`] if the file cannot be read.
pub fn read(path: impl AsRef<Path>) -> PersistenceResult<Vec<u8>> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(PersistenceError::InvalidInput("path cannot be empty".into()));
    }

    Ok(fs::read(path)?)
}

/// Whether anything exists at the path.
#[must_use]
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Determine asynchronously whether anything exists at the path.
///
/// The check runs on a background thread and the result is delivered back
/// to the awaiting context.
pub async fn exists_async(path: impl Into<PathBuf>) -> bool {
    let path = path.into();
    let (tx, rx) = oneshot::channel();

    std::thread::spawn(move || {
        let _ = tx.send(exists(&path));
    });

    rx.await.unwrap_or_else(|_| {
        warn!("existence check did not report back; treating as absent");
        false
    })
}

/// Delete whatever the path names, file or directory tree.
///
/// # Errors
/// Returns [`PersistenceError::InvalidInput`] if `path` is empty, or
/// [`PersistenceError::Io`] if nothing exists there or removal fails.
pub fn delete(path: impl AsRef<Path>) -> PersistenceResult<()> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(PersistenceError::InvalidInput("path cannot be empty".into()));
    }

    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Move a file from a source path to a destination path.
///
/// Missing parent directories of `destination` are created first.
///
/// # Errors
/// Returns [`PersistenceError::InvalidInput`] if either path is empty, or
/// [`PersistenceError::Io`] if the directory creation or move fails.
pub fn move_file(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> PersistenceResult<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if source.as_os_str().is_empty() {
        return Err(PersistenceError::InvalidInput(
            "source path cannot be empty".into(),
        ));
    }
    if destination.as_os_str().is_empty() {
        return Err(PersistenceError::InvalidInput(
            "destination path cannot be empty".into(),
        ));
    }

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_directory(parent)?;
        }
    }

    fs::rename(source, destination)?;
    Ok(())
}

/// Create a directory, including any intermediate components.
///
/// A directory that already exists is not an error.
///
/// # Errors
/// Returns [`PersistenceError::InvalidInput`] if `path` is empty, or
/// [`PersistenceError::Io`] if creation fails.
pub fn create_directory(path: impl AsRef<Path>) -> PersistenceResult<()> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(PersistenceError::InvalidInput("path cannot be empty".into()));
    }

    debug!("creating directory: {}", path.display());
    fs::create_dir_all(path)?;
    Ok(())
}
