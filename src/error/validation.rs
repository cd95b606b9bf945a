//! Input validation errors raised before anything is persisted.

use crate::models::Department;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("mobile number must be exactly 10 digits")]
    InvalidMobile,

    #[error("no citizen is logged in")]
    NotLoggedIn,

    #[error("no department selected")]
    NoDepartment,

    #[error("no service selected")]
    NoService,

    #[error("{department} does not offer {service:?}")]
    ServiceNotOffered {
        department: Department,
        service: String,
    },

    #[error("description is empty")]
    EmptyDescription,
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::InvalidMobile => {
                "Please enter a valid 10-digit mobile number".to_string()
            }
            ValidationError::NotLoggedIn => "Please log in before filing a request".to_string(),
            ValidationError::NoDepartment => "Please choose a department first".to_string(),
            ValidationError::NoService => "Please choose the type of service".to_string(),
            ValidationError::ServiceNotOffered {
                department,
                service,
            } => format!("'{}' is not a {} service", service, department),
            ValidationError::EmptyDescription => "Please describe the problem".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidMobile => "INVALID_MOBILE",
            ValidationError::NotLoggedIn => "NOT_LOGGED_IN",
            ValidationError::NoDepartment => "NO_DEPARTMENT",
            ValidationError::NoService => "NO_SERVICE",
            ValidationError::ServiceNotOffered { .. } => "SERVICE_NOT_OFFERED",
            ValidationError::EmptyDescription => "EMPTY_DESCRIPTION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_message() {
        assert_eq!(
            ValidationError::InvalidMobile.user_message(),
            "Please enter a valid 10-digit mobile number"
        );
    }

    #[test]
    fn test_service_not_offered_message() {
        let err = ValidationError::ServiceNotOffered {
            department: Department::Gas,
            service: "Power Outage".to_string(),
        };
        assert_eq!(err.user_message(), "'Power Outage' is not a Gas Distribution service");
        assert_eq!(err.error_code(), "SERVICE_NOT_OFFERED");
    }
}
