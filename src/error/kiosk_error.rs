//! Unified error type for the kiosk.
//!
//! `KioskError` gathers the per-layer error enums so that view-controller
//! actions can return one type and let the presentation layer decide how to
//! surface it.

use std::fmt;

use super::category::ErrorCategory;
use super::export::ExportError;
use super::storage::StorageError;
use super::validation::ValidationError;
use crate::models::InvalidStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskError {
    /// Malformed input or missing selection; state unchanged.
    Validation(ValidationError),

    /// The complaint id is not in the store; nothing mutated.
    NotFound { id: String },

    /// A raw status tag outside the lifecycle labels.
    InvalidStatus { value: String },

    /// Persistence layer failure.
    Storage(StorageError),

    /// Receipt export or print failure.
    Export(ExportError),
}

impl KioskError {
    pub fn not_found(id: impl Into<String>) -> Self {
        KioskError::NotFound { id: id.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            KioskError::Validation(_) => ErrorCategory::User,
            KioskError::NotFound { .. } => ErrorCategory::NotFound,
            KioskError::InvalidStatus { .. } => ErrorCategory::Client,
            KioskError::Storage(_) => ErrorCategory::System,
            KioskError::Export(ExportError::NoReceipt) => ErrorCategory::User,
            KioskError::Export(_) => ErrorCategory::External,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            KioskError::Validation(err) => err.user_message(),
            KioskError::NotFound { .. } => "Complaint not found".to_string(),
            KioskError::InvalidStatus { value } => {
                format!("'{}' is not a valid request status", value)
            }
            KioskError::Storage(err) => err.user_message(),
            KioskError::Export(err) => err.user_message(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            KioskError::Validation(err) => err.error_code(),
            KioskError::NotFound { .. } => "COMPLAINT_NOT_FOUND",
            KioskError::InvalidStatus { .. } => "INVALID_STATUS",
            KioskError::Storage(err) => err.error_code(),
            KioskError::Export(err) => err.error_code(),
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, KioskError::Validation(_))
    }
}

impl fmt::Display for KioskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KioskError::Validation(err) => write!(f, "{}", err),
            KioskError::NotFound { id } => write!(f, "complaint {} not found", id),
            KioskError::InvalidStatus { value } => write!(f, "invalid status {:?}", value),
            KioskError::Storage(err) => write!(f, "{}", err),
            KioskError::Export(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for KioskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KioskError::Validation(err) => Some(err),
            KioskError::Storage(err) => Some(err),
            KioskError::Export(err) => Some(err),
            KioskError::NotFound { .. } | KioskError::InvalidStatus { .. } => None,
        }
    }
}

impl From<ValidationError> for KioskError {
    fn from(err: ValidationError) -> Self {
        KioskError::Validation(err)
    }
}

impl From<StorageError> for KioskError {
    fn from(err: StorageError) -> Self {
        KioskError::Storage(err)
    }
}

impl From<ExportError> for KioskError {
    fn from(err: ExportError) -> Self {
        KioskError::Export(err)
    }
}

impl From<InvalidStatus> for KioskError {
    fn from(err: InvalidStatus) -> Self {
        KioskError::InvalidStatus { value: err.value }
    }
}
