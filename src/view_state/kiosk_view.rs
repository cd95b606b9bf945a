//! The kiosk's transient session state.

use crate::app::{Notice, Screen};
use crate::models::{Complaint, Language};

use super::ComplaintForm;

/// Maximum digits accepted by the mobile number field.
pub const MOBILE_INPUT_MAX: usize = 10;

/// Everything the kiosk remembers between key presses that is not durable.
///
/// Owned by [`crate::app::App`] and mutated only through its named actions;
/// the UI receives it by shared reference.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub screen: Screen,
    pub language: Language,
    pub high_contrast: bool,

    /// Digits typed on the authentication screen
    pub mobile_input: String,

    pub form: ComplaintForm,

    /// The complaint shown on the receipt screen
    pub last_complaint: Option<Complaint>,

    /// Snapshot bound to the open timeline modal; `None` when closed
    pub tracking: Option<Complaint>,

    /// Pending message dialog, replaces alert boxes
    pub notice: Option<Notice>,

    /// Highlighted entry on menu screens (landing, dashboard, services)
    pub menu_cursor: usize,

    /// Highlighted row on list screens (status, admin)
    pub list_cursor: usize,

    /// A receipt export is running in the background
    pub export_in_progress: bool,
}

impl ViewState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn is_timeline_open(&self) -> bool {
        self.tracking.is_some()
    }

    pub fn has_modal(&self) -> bool {
        self.notice.is_some() || self.tracking.is_some()
    }

    /// Append a typed character to the mobile field, keeping digits only.
    pub fn push_mobile_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.mobile_input.len() < MOBILE_INPUT_MAX {
            self.mobile_input.push(c);
        }
    }

    /// Drop all in-progress input (used on logout).
    pub fn clear_session_input(&mut self) {
        self.mobile_input.clear();
        self.form = ComplaintForm::default();
        self.last_complaint = None;
        self.tracking = None;
        self.menu_cursor = 0;
        self.list_cursor = 0;
    }

    /// Replace a cached snapshot of `complaint` wherever it is shown.
    pub fn refresh_snapshots(&mut self, complaint: &Complaint) {
        for slot in [&mut self.last_complaint, &mut self.tracking] {
            if let Some(cached) = slot {
                if cached.id == complaint.id {
                    *cached = complaint.clone();
                }
            }
        }
    }
}
