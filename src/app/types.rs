//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`DashboardItem`] - Citizen dashboard menu entries
//! - [`Notice`] - Blocking message dialog contents
//! - [`AppMessage`] - Results posted back from background tasks

use std::path::PathBuf;

use crate::error::{ErrorCategory, ExportError, KioskError};

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Screen {
    #[default]
    Landing,
    Auth,
    Dashboard,
    Services,
    ComplaintForm,
    Receipt,
    Status,
    Admin,
}

impl Screen {
    /// Screens reachable without a logged-in citizen
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Landing | Screen::Auth | Screen::Admin)
    }
}

/// Entries on the citizen dashboard menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardItem {
    FileComplaint,
    TrackStatus,
    Logout,
}

impl DashboardItem {
    pub const ALL: [DashboardItem; 3] = [
        DashboardItem::FileComplaint,
        DashboardItem::TrackStatus,
        DashboardItem::Logout,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error(ErrorCategory),
}

/// Contents of the message dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub hint: Option<String>,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, NoticeKind::Error(_))
    }
}

impl From<&KioskError> for Notice {
    fn from(err: &KioskError) -> Self {
        let category = err.category();
        Self {
            kind: NoticeKind::Error(category),
            title: category.title().to_string(),
            message: err.user_message(),
            hint: Some(err.recovery_hint().to_string()),
        }
    }
}

/// Why a receipt document is being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPurpose {
    /// Save a PDF for the citizen
    Save,
    /// Save, then hand to the system viewer for printing
    Print,
}

/// Messages posted to the event loop by background work.
#[derive(Debug)]
pub enum AppMessage {
    ExportFinished {
        purpose: ExportPurpose,
        result: Result<PathBuf, ExportError>,
    },
}
