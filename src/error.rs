//! Error types for stencil operations.
//!
//! This module defines [`StencilError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `StencilError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `StencilError::Other`) for unexpected errors
//! - Fetch failures are reported to the user, never turned into an exit code

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stencil operations.
#[derive(Debug, Error)]
pub enum StencilError {
    /// Registry manifest not found at expected location.
    #[error("Registry not found: {path}")]
    RegistryNotFound { path: PathBuf },

    /// Failed to parse a registry manifest.
    #[error("Failed to parse registry at {path}: {message}")]
    RegistryParseError { path: PathBuf, message: String },

    /// The same template name appears twice in a registry.
    #[error("Duplicate template name in registry: {name}")]
    DuplicateTemplate { name: String },

    /// A repository reference does not match any known form.
    #[error("Invalid repository reference: {reference}")]
    InvalidReference { reference: String },

    /// Retrieving a repository failed.
    #[error("Failed to fetch {reference}: {message}")]
    FetchFailed { reference: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for stencil operations.
pub type Result<T> = std::result::Result<T, StencilError>;
