// ⚠️ Archive Errors - the two ways a catalog operation can fail
//
// InvalidArgument: construction-time or parse-time validation failure
// NotFound:        lookup by key found nothing

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    /// A field or raw value failed validation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No subject stored under the requested key
    #[error("not found: {0}")]
    NotFound(String),
}

impl ArchiveError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ArchiveError::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ArchiveError::NotFound(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ArchiveError::InvalidArgument(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ArchiveError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Trim a required text field, failing when nothing is left
pub fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ArchiveError::invalid(format!("{} is required and cannot be blank", field)));
    }
    Ok(trimmed.to_string())
}
