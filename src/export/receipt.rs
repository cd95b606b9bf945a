//! Receipt content shared by the receipt screen and the exported document.

use crate::models::{Complaint, Translation};

/// Shown under the request id on every receipt.
pub const ROUTING_NOTE: &str = "Your request has been routed to the local circle office.";

/// Longest field value printed in full; longer values are cut with `...`
/// so the document always fits on one page.
pub const MAX_VALUE_CHARS: usize = 120;

/// A labelled row on the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptField {
    pub label: &'static str,
    pub value: String,
}

/// Everything printed on a complaint receipt, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub heading: &'static str,
    pub request_id_label: &'static str,
    pub request_id: String,
    pub fields: Vec<ReceiptField>,
    pub note: &'static str,
}

impl Receipt {
    pub fn for_complaint(complaint: &Complaint, t: &Translation) -> Self {
        let mut fields = vec![
            field("Department", complaint.department.label()),
            field("Service", &complaint.service_type),
            field("Status", complaint.status.label()),
            field("Submitted", &complaint.timestamp),
            field("Citizen ID", &complaint.user_id),
        ];
        if let Some(name) = &complaint.attachment_name {
            fields.push(field("Attachment", name));
        }

        Self {
            heading: t.complaint_success,
            request_id_label: t.request_id,
            request_id: complaint.id.clone(),
            fields,
            note: ROUTING_NOTE,
        }
    }

    /// Plain text lines below the heading.
    pub fn body_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{}: {}", self.request_id_label, self.request_id),
            String::new(),
        ];
        lines.extend(
            self.fields
                .iter()
                .map(|f| format!("{}: {}", f.label, clip(&f.value))),
        );
        lines.push(String::new());
        lines.push(self.note.to_string());
        lines
    }
}

fn clip(value: &str) -> String {
    match value.char_indices().nth(MAX_VALUE_CHARS) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_string(),
    }
}

fn field(label: &'static str, value: &str) -> ReceiptField {
    ReceiptField {
        label,
        value: value.to_string(),
    }
}
