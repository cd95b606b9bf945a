//! Error category classification.
//!
//! Categories drive how the kiosk presents a failure: blocking notice,
//! inline hint, or a suggestion to use a manual fallback.

use std::fmt;

/// High-level classification of kiosk errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed input or a missing selection. Fixed by the citizen.
    User,

    /// The referenced complaint does not exist.
    NotFound,

    /// A collaborator outside the kiosk failed (PDF export, system viewer).
    External,

    /// Local storage or filesystem problem.
    System,

    /// A value violated a domain invariant (unknown status tag).
    Client,
}

impl ErrorCategory {
    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::External => "external",
            ErrorCategory::System => "system",
            ErrorCategory::Client => "client",
        }
    }

    /// Title shown on the notice dialog.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Please check your input",
            ErrorCategory::NotFound => "Not found",
            ErrorCategory::External => "Could not complete",
            ErrorCategory::System => "Storage problem",
            ErrorCategory::Client => "Application error",
        }
    }

    /// Suggested next step for the person at the kiosk.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Correct the highlighted field and try again",
            ErrorCategory::NotFound => "Refresh the list and pick the request again",
            ErrorCategory::External => "Use Print and choose \"Save as PDF\" instead",
            ErrorCategory::System => "Ask kiosk staff to check the data directory",
            ErrorCategory::Client => "Please report this issue to kiosk staff",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
