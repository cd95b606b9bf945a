//! Persistence error types.

use std::io;
use std::path::PathBuf;

/// Failure of the key-value store underneath the complaint store.
///
/// Reads and writes report these explicitly; a broken store never degrades
/// into "no data".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage cannot be used at all (missing directory, disabled store).
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },

    /// The disk or quota is full.
    #[error("storage quota exceeded at {path:?}")]
    QuotaExceeded { path: PathBuf },

    /// Permission denied while reading or writing a record.
    #[error("permission denied: cannot {operation} {path:?}")]
    PermissionDenied { path: PathBuf, operation: String },

    /// A stored record could not be decoded.
    #[error("corrupt record {key}: {message}")]
    Corrupt { key: String, message: String },

    /// Any other I/O failure.
    #[error("failed to {operation} {key}: {message}")]
    Io {
        key: String,
        operation: String,
        message: String,
    },
}

impl StorageError {
    pub fn user_message(&self) -> String {
        match self {
            StorageError::Unavailable { .. } => {
                "Kiosk storage is unavailable. Your request could not be saved.".to_string()
            }
            StorageError::QuotaExceeded { .. } => {
                "Kiosk storage is full. Your request could not be saved.".to_string()
            }
            StorageError::PermissionDenied { .. } => {
                "The kiosk is not allowed to write its records.".to_string()
            }
            StorageError::Corrupt { key, .. } => {
                format!("Stored record '{}' is damaged and could not be read.", key)
            }
            StorageError::Io { operation, .. } => {
                format!("Failed to {} kiosk records.", operation)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE",
            StorageError::QuotaExceeded { .. } => "STORAGE_QUOTA_EXCEEDED",
            StorageError::PermissionDenied { .. } => "STORAGE_PERMISSION_DENIED",
            StorageError::Corrupt { .. } => "STORAGE_CORRUPT",
            StorageError::Io { .. } => "STORAGE_IO",
        }
    }
}

/// Classify an I/O error raised while touching `path` for record `key`.
pub fn classify_io_error(err: io::Error, key: &str, path: PathBuf, operation: &str) -> StorageError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => StorageError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        io::ErrorKind::StorageFull | io::ErrorKind::QuotaExceeded => {
            StorageError::QuotaExceeded { path }
        }
        io::ErrorKind::NotFound | io::ErrorKind::ReadOnlyFilesystem => {
            StorageError::Unavailable {
                message: format!("{}: {}", path.display(), err),
            }
        }
        _ => StorageError::Io {
            key: key.to_string(),
            operation: operation.to_string(),
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_denied() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let classified = classify_io_error(err, "k", PathBuf::from("/data/k.json"), "write");
        assert!(matches!(
            classified,
            StorageError::PermissionDenied { ref operation, .. } if operation == "write"
        ));
        assert_eq!(classified.error_code(), "STORAGE_PERMISSION_DENIED");
    }

    #[test]
    fn test_classify_other_io() {
        let err = io::Error::new(io::ErrorKind::Interrupted, "interrupted");
        let classified = classify_io_error(err, "complaints", PathBuf::from("/x"), "read");
        assert_eq!(classified.error_code(), "STORAGE_IO");
        assert_eq!(classified.user_message(), "Failed to read kiosk records.");
    }

    #[test]
    fn test_corrupt_message_names_key() {
        let err = StorageError::Corrupt {
            key: "suvidha_complaints".to_string(),
            message: "expected value".to_string(),
        };
        assert!(err.user_message().contains("suvidha_complaints"));
        assert!(err.to_string().contains("expected value"));
    }
}
