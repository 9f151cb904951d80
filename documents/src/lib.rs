//! File management helpers for the platform documents directory.
//!
//! Mirrors the cache helpers for user documents: a relative path is
//! resolved against the documents directory and the file operation is
//! delegated to `filekit-persistence`.

#![warn(missing_docs)]

mod sys;

use std::path::{Path, PathBuf};

use filekit_persistence::{self as persistence, PersistenceError};
use thiserror::Error;

/// Errors that can occur when working with the documents directory.
#[derive(Debug, Error)]
pub enum DocumentsError {
    /// No documents directory could be resolved on this platform.
    #[error("documents directory unavailable")]
    Unavailable,

    /// Invalid input (e.g. an empty relative path).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The underlying persistence call failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// The application's documents directory.
#[must_use]
pub fn dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
    {
        dirs::document_dir()
    }
    #[cfg(any(target_os = "ios", target_os = "android"))]
    {
        sys::documents_dir()
    }
    #[cfg(not(any(
        target_os = "macos",
        target_os = "windows",
        target_os = "linux",
        target_os = "ios",
        target_os = "android"
    )))]
    {
        None
    }
}

/// The documents directory resolved from an Android `Context`.
#[cfg(target_os = "android")]
pub fn dir_with_context(
    env: &mut jni::JNIEnv,
    context: &jni::objects::JObject,
) -> Option<PathBuf> {
    sys::documents_dir_with_context(env, context)
}

/// Absolute path of a resource in the documents directory.
///
/// An empty relative path resolves to the documents directory itself.
#[must_use]
pub fn path_for(relative: impl AsRef<Path>) -> Option<PathBuf> {
    let relative = relative.as_ref();
    let dir = dir()?;

    if relative.as_os_str().is_empty() {
        return Some(dir);
    }

    Some(dir.join(relative))
}

/// Save data to a path relative to the documents directory.
///
/// Missing intermediate directories are created first.
///
/// # Errors
/// Returns [`DocumentsError::InvalidInput`] if `data` or `relative` is
/// empty, [`DocumentsError::Unavailable`] if no documents directory exists
/// on this platform, or [`DocumentsError::Persistence`] if the write fails.
pub fn write(data: &[u8], relative: impl AsRef<Path>) -> Result<(), DocumentsError> {
    let relative = relative.as_ref();

    if relative.as_os_str().is_empty() {
        return Err(DocumentsError::InvalidInput(
            "relative path cannot be empty".into(),
        ));
    }
    if data.is_empty() {
        return Err(DocumentsError::InvalidInput("data cannot be empty".into()));
    }

    let absolute = path_for(relative).ok_or(DocumentsError::Unavailable)?;
    persistence::write(data, absolute)?;
    Ok(())
}

/// Retrieve data from a path relative to the documents directory.
///
/// # Errors
/// Returns [`DocumentsError::InvalidInput`] if `relative` is empty,
/// [`DocumentsError::Unavailable`] if no documents directory exists on this
/// platform, or [`DocumentsError::Persistence`] if the read fails.
pub fn read(relative: impl AsRef<Path>) -> Result<Vec<u8>, DocumentsError> {
    let relative = relative.as_ref();

    if relative.as_os_str().is_empty() {
        return Err(DocumentsError::InvalidInput(
            "relative path cannot be empty".into(),
        ));
    }

    let absolute = path_for(relative).ok_or(DocumentsError::Unavailable)?;
    Ok(persistence::read(absolute)?)
}

/// Whether a file exists at a path relative to the documents directory.
#[must_use]
pub fn exists(relative: impl AsRef<Path>) -> bool {
    let relative = relative.as_ref();

    if relative.as_os_str().is_empty() {
        return false;
    }

    path_for(relative).is_some_and(persistence::exists)
}

/// Delete the file or directory at a path relative to the documents
/// directory.
///
/// # Errors
/// Returns [`DocumentsError::InvalidInput`] if `relative` is empty,
/// [`DocumentsError::Unavailable`] if no documents directory exists on this
/// platform, or [`DocumentsError::Persistence`] if the removal fails.
pub fn delete(relative: impl AsRef<Path>) -> Result<(), DocumentsError> {
    let relative = relative.as_ref();

    if relative.as_os_str().is_empty() {
        return Err(DocumentsError::InvalidInput(
            "relative path cannot be empty".into(),
        ));
    }

    let absolute = path_for(relative).ok_or(DocumentsError::Unavailable)?;
    persistence::delete(absolute)?;
    Ok(())
}
