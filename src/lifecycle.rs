//! Complaint lifecycle engine.
//!
//! Construction rules and the status state machine, independent of the UI:
//!
//! ```text
//! Submitted ──▶ Under Review ──▶ Assigned ──▶ Resolved ─┐
//!                                               ▲        │
//!                                               └────────┘
//! ```
//!
//! Status only moves forward one step per advance; Resolved loops onto itself.

use std::collections::HashSet;

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::error::{KioskError, KioskResult, ValidationError};
use crate::models::{Complaint, ComplaintDraft, ComplaintStatus, InvalidStatus};
use crate::storage::ComplaintStore;

/// Format of [`Complaint::timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

const CITIZEN_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const CITIZEN_ID_LEN: usize = 5;
const REQUEST_ID_MIN: u128 = 100_000;
const REQUEST_ID_SPAN: u128 = 900_000;

/// Status immediately after `current`. Resolved stays Resolved.
pub fn next_status(current: ComplaintStatus) -> ComplaintStatus {
    match current {
        ComplaintStatus::Submitted => ComplaintStatus::UnderReview,
        ComplaintStatus::UnderReview => ComplaintStatus::Assigned,
        ComplaintStatus::Assigned => ComplaintStatus::Resolved,
        ComplaintStatus::Resolved => ComplaintStatus::Resolved,
    }
}

/// [`next_status`] for a raw tag, e.g. one read from an external source.
pub fn next_status_label(current: &str) -> Result<ComplaintStatus, InvalidStatus> {
    current.parse().map(next_status)
}

/// Issues complaint and citizen identifiers.
///
/// Request ids are `REQ-` followed by six digits. The generator remembers
/// every id it has issued or been seeded with and never repeats one.
#[derive(Debug, Default)]
pub struct RequestIdGenerator {
    issued: HashSet<String>,
}

impl RequestIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark ids that already exist (e.g. in the store) as taken.
    pub fn seed<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.issued.extend(ids.into_iter().map(Into::into));
    }

    pub fn is_taken(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    pub fn next_request_id(&mut self) -> String {
        loop {
            let n = REQUEST_ID_MIN + Uuid::new_v4().as_u128() % REQUEST_ID_SPAN;
            let id = format!("REQ-{}", n);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

/// A fresh citizen id, `CIT-` followed by five uppercase alphanumerics.
pub fn citizen_id() -> String {
    let mut bits = Uuid::new_v4().as_u128();
    let radix = CITIZEN_ID_ALPHABET.len() as u128;
    let suffix: String = (0..CITIZEN_ID_LEN)
        .map(|_| {
            let c = CITIZEN_ID_ALPHABET[(bits % radix) as usize] as char;
            bits /= radix;
            c
        })
        .collect();
    format!("CIT-{}", suffix)
}

/// `true` if `mobile` is exactly ten ASCII digits.
pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit())
}

/// Check a draft against the department catalogue.
pub fn validate_draft(draft: &ComplaintDraft) -> Result<(), ValidationError> {
    if draft.service_type.trim().is_empty() {
        return Err(ValidationError::NoService);
    }
    if !draft.department.offers(&draft.service_type) {
        return Err(ValidationError::ServiceNotOffered {
            department: draft.department,
            service: draft.service_type.clone(),
        });
    }
    if draft.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(())
}

/// Build a new Submitted complaint stamped with the current local time.
pub fn create_complaint(
    draft: ComplaintDraft,
    user_id: &str,
    ids: &mut RequestIdGenerator,
) -> Result<Complaint, ValidationError> {
    create_complaint_at(draft, user_id, ids, Local::now())
}

/// [`create_complaint`] with an explicit creation time.
pub fn create_complaint_at(
    draft: ComplaintDraft,
    user_id: &str,
    ids: &mut RequestIdGenerator,
    created_at: DateTime<Local>,
) -> Result<Complaint, ValidationError> {
    if user_id.trim().is_empty() {
        return Err(ValidationError::NotLoggedIn);
    }
    validate_draft(&draft)?;

    let attachment_name = draft
        .attachment_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    Ok(Complaint {
        id: ids.next_request_id(),
        department: draft.department,
        service_type: draft.service_type,
        description: draft.description.trim().to_string(),
        status: ComplaintStatus::Submitted,
        timestamp: created_at.format(TIMESTAMP_FORMAT).to_string(),
        user_id: user_id.to_string(),
        attachment_name,
    })
}

/// Outcome of advancing a stored complaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The status moved one step; `complaint` carries the new status.
    Moved {
        complaint: Complaint,
        from: ComplaintStatus,
    },
    /// The complaint was already Resolved; nothing was written.
    AlreadyResolved { complaint: Complaint },
}

impl Advance {
    pub fn complaint(&self) -> &Complaint {
        match self {
            Advance::Moved { complaint, .. } | Advance::AlreadyResolved { complaint } => complaint,
        }
    }

    pub fn status(&self) -> ComplaintStatus {
        self.complaint().status
    }

    pub fn changed(&self) -> bool {
        matches!(self, Advance::Moved { .. })
    }
}

/// Advance complaint `id` in `store` by one lifecycle step.
///
/// Fails with `NotFound` if the id is unknown; nothing is written in that
/// case or when the complaint is already Resolved.
pub fn advance(store: &ComplaintStore, id: &str) -> KioskResult<Advance> {
    let mut complaint = store
        .find_complaint(id)?
        .ok_or_else(|| KioskError::not_found(id))?;

    if complaint.status.is_terminal() {
        return Ok(Advance::AlreadyResolved { complaint });
    }

    let from = complaint.status;
    let to = next_status(from);
    if !store.update_complaint_status(id, to)? {
        return Err(KioskError::not_found(id));
    }
    complaint.status = to;
    Ok(Advance::Moved { complaint, from })
}
