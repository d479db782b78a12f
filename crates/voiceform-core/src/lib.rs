//! Core types for the voiceform backend: configuration, error taxonomy,
//! shared wire models, and upload validation. This crate performs no I/O.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use validation::{AudioValidator, ValidationError};
