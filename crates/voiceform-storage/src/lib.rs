//! Storage sink for uploaded files.
//!
//! The [`Storage`] trait abstracts where upload bytes land; the only
//! backend is the local filesystem. Keys are flat filenames relative to
//! the backend's base directory and are validated against path traversal.

mod local;
mod traits;

pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
