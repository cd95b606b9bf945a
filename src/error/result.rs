//! Result type alias for kiosk operations.

use super::kiosk_error::KioskError;

/// Type alias for Results using KioskError.
pub type KioskResult<T> = Result<T, KioskError>;

/// Extension trait that records failures in the log before they are shown.
pub trait ResultExt<T> {
    /// Log an error for `operation` and pass the result through unchanged.
    ///
    /// Validation failures are logged at `warn`, everything else at `error`.
    fn log_failure(self, operation: &str) -> KioskResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<KioskError>,
{
    fn log_failure(self, operation: &str) -> KioskResult<T> {
        self.map_err(|e| {
            let err: KioskError = e.into();
            if err.is_validation() {
                tracing::warn!(
                    operation,
                    code = err.error_code(),
                    "{}",
                    err
                );
            } else {
                tracing::error!(
                    operation,
                    code = err.error_code(),
                    category = %err.category(),
                    "{}",
                    err
                );
            }
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_log_failure_converts_error() {
        let result: Result<(), ValidationError> = Err(ValidationError::NoService);
        let converted = result.log_failure("submit_complaint");
        assert_eq!(
            converted.unwrap_err(),
            KioskError::Validation(ValidationError::NoService)
        );
    }

    #[test]
    fn test_log_failure_passes_ok_through() {
        let result: KioskResult<u8> = Ok(7);
        assert_eq!(result.log_failure("noop").unwrap(), 7);
    }
}
