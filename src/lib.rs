//! # Filekit
//!
//! Convenient, cross-platform file management helpers.
//!
//! Filekit wraps the platform filesystem APIs behind a small, unified API:
//! reading, writing, deleting, moving, and checking existence of files under
//! the well-known application directories, plus a generic persistence layer
//! for arbitrary absolute paths. It covers macOS, iOS, Android, Windows, and
//! Linux.
//!
//! ## Features
//!
//! Filekit is modular. Enable only the pieces you need:
//!
//! - `persistence`: File operations on arbitrary absolute paths.
//! - `cache`: File operations relative to the platform cache directory.
//! - `documents`: File operations relative to the platform documents
//!   directory.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! filekit = { version = "0.1", features = ["cache"] }
//! ```
//!
//! ```rust,ignore
//! use filekit::cache;
//!
//! fn store_thumbnail(bytes: &[u8]) {
//!     if let Err(err) = cache::write(bytes, "thumbnails/42.png") {
//!         eprintln!("could not cache thumbnail: {err}");
//!     }
//! }
//! ```

#[cfg(feature = "cache")]
pub use filekit_cache as cache;

#[cfg(feature = "documents")]
pub use filekit_documents as documents;

#[cfg(feature = "persistence")]
pub use filekit_persistence as persistence;
