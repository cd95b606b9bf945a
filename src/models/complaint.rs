use serde::{Deserialize, Serialize};

use super::{ComplaintStatus, Department};

/// A citizen-filed service request against one department.
///
/// Only `status` ever changes after creation, and only through
/// [`crate::storage::ComplaintStore::update_complaint_status`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    pub department: Department,
    pub service_type: String,
    pub description: String,
    pub status: ComplaintStatus,
    /// Local creation time, human readable
    pub timestamp: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<String>,
}

impl Complaint {
    pub fn belongs_to(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Form input collected before a complaint exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintDraft {
    pub department: Department,
    pub service_type: String,
    pub description: String,
    pub attachment_name: Option<String>,
}

impl ComplaintDraft {
    pub fn new(
        department: Department,
        service_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            department,
            service_type: service_type.into(),
            description: description.into(),
            attachment_name: None,
        }
    }

    pub fn with_attachment(mut self, name: impl Into<String>) -> Self {
        self.attachment_name = Some(name.into());
        self
    }
}
