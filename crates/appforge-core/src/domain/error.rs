use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic at outer layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    /// The one failure the render pipeline raises: the requested template
    /// name is absent from the registry. Fatal to that call, never retried.
    #[error("No template registered under '{name}'")]
    TemplateNotFound { name: String },

    // ========================================================================
    // Caller-contract violations
    // ========================================================================
    /// A template reached the pipeline with no versions, or a version with
    /// no variants. The registry does not validate structure, so this only
    /// occurs when a caller breaks the non-empty-variants convention.
    #[error("Template '{template}' has no variants to sample")]
    EmptyVariants { template: String },

    /// Two files in one bundle list share a path.
    #[error("Duplicate path in bundle: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name } => vec![
                format!("No template is registered under '{}'", name),
                "List seeded templates: appforge templates".into(),
                "Seed the registry with --seed-file or check the template name".into(),
            ],
            Self::EmptyVariants { template } => vec![
                format!("Template '{}' carries a version with no variants", template),
                "Fix the seed definition: every version needs at least one variant".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("The path '{}' appears twice in one bundle", path),
                "This is a generator bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::EmptyVariants { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
