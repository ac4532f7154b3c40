//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Registry access failed (lock poisoned).
    #[error("Template registry is unavailable")]
    RegistryLock,

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Bundle output root already exists.
    #[error("Output already exists at {path}")]
    OutputExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    /// Seeding the registry from an external source failed.
    #[error("Seeding templates failed: {reason}")]
    SeedFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RegistryLock => vec![
                "The template registry is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different output directory".into(),
            ],
            Self::SeedFailed { reason } => vec![
                format!("Seed source could not be loaded: {}", reason),
                "Check the seed file path and its TOML syntax".into(),
            ],
            Self::RollbackFailed { .. } => vec![
                "Partial output may remain on disk; remove it manually".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RegistryLock => ErrorCategory::Internal,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::OutputExists { .. } => ErrorCategory::Validation,
            Self::SeedFailed { .. } => ErrorCategory::Configuration,
        }
    }
}
