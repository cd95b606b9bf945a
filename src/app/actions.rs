//! User actions.
//!
//! Each method is one citizen or staff intent. They validate, call the
//! lifecycle engine and store, then update [`crate::view_state::ViewState`].
//! Failures leave the view state untouched unless noted.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::error::{ExportError, KioskError, KioskResult, ValidationError};
use crate::export;
use crate::lifecycle::{self, Advance};
use crate::models::{Complaint, ComplaintDraft, Department, Language, User};
use crate::view_state::ComplaintForm;

use super::{App, AppMessage, ExportPurpose, Screen};

impl App {
    // ========================================================================
    // Language & accessibility
    // ========================================================================

    pub fn select_language(&mut self, language: Language) {
        self.state.language = language;
        self.mark_dirty();
    }

    /// Landing-screen choice: set the language and continue to login.
    pub fn choose_language(&mut self, language: Language) {
        self.select_language(language);
        self.navigate_to(Screen::Auth);
    }

    pub fn toggle_high_contrast(&mut self) {
        self.state.high_contrast = !self.state.high_contrast;
        self.mark_dirty();
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Sign in with a mobile number.
    ///
    /// The number must be exactly ten digits; there is no OTP check. A new
    /// citizen id is issued on every login and replaces any current user.
    pub fn login(&mut self, mobile: &str) -> KioskResult<User> {
        let mobile = mobile.trim();
        if !lifecycle::is_valid_mobile(mobile) {
            return Err(ValidationError::InvalidMobile.into());
        }

        let user = User::citizen(lifecycle::citizen_id(), mobile);
        self.store.set_current_user(Some(&user))?;
        info!(user_id = %user.id, mobile = %user.masked_mobile(), "Citizen logged in");

        self.current_user = Some(user.clone());
        self.state.mobile_input.clear();
        self.state.menu_cursor = 0;
        self.state.screen = Screen::Dashboard;
        self.mark_dirty();
        Ok(user)
    }

    /// Log in with whatever is typed in the mobile field.
    pub fn submit_mobile(&mut self) -> KioskResult<User> {
        let mobile = self.state.mobile_input.clone();
        self.login(&mobile)
    }

    /// Sign out and return to the landing screen.
    ///
    /// Local session state is discarded even if clearing the persisted user
    /// fails; that failure is still returned.
    pub fn logout(&mut self) -> KioskResult<()> {
        let cleared = self.store.set_current_user(None);
        if let Some(user) = self.current_user.take() {
            info!(user_id = %user.id, "Citizen logged out");
        }
        self.state.clear_session_input();
        self.state.screen = Screen::Landing;
        self.mark_dirty();
        cleared.map_err(KioskError::from)
    }

    // ========================================================================
    // Complaint form
    // ========================================================================

    /// Pick a department and open a fresh complaint form for it.
    pub fn select_department(&mut self, department: Department) {
        self.state.form = ComplaintForm::for_department(department);
        self.state.screen = Screen::ComplaintForm;
        self.mark_dirty();
    }

    /// Pick a service from the selected department's catalogue.
    pub fn select_service(&mut self, service: &str) -> KioskResult<()> {
        let department = self
            .state
            .form
            .department
            .ok_or(ValidationError::NoDepartment)?;
        let Some(index) = department.services().iter().position(|s| *s == service) else {
            return Err(ValidationError::ServiceNotOffered {
                department,
                service: service.to_string(),
            }
            .into());
        };
        self.state.form.service = Some(service.to_string());
        self.state.form.service_cursor = index;
        self.mark_dirty();
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.state.form.description = description.into();
        self.mark_dirty();
    }

    /// Record an attachment by file name only; no content is read.
    pub fn set_attachment_name(&mut self, name: impl Into<String>) {
        self.state.form.attachment_name = name.into();
        self.mark_dirty();
    }

    /// File a complaint from the form and show its receipt.
    ///
    /// Requires a logged-in citizen and a selected department. On success the
    /// form is cleared and the new complaint is cached for the receipt.
    pub fn submit_complaint(&mut self, description: &str) -> KioskResult<Complaint> {
        let user_id = self
            .current_user
            .as_ref()
            .map(|u| u.id.clone())
            .ok_or(ValidationError::NotLoggedIn)?;
        let department = self
            .state
            .form
            .department
            .ok_or(ValidationError::NoDepartment)?;

        let form = &self.state.form;
        let mut draft = ComplaintDraft::new(
            department,
            form.service.clone().unwrap_or_default(),
            description,
        );
        if !form.attachment_name.trim().is_empty() {
            draft = draft.with_attachment(form.attachment_name.clone());
        }

        // Pick up ids written by other kiosks before issuing a new one
        self.refresh_complaints()?;
        let complaint = lifecycle::create_complaint(draft, &user_id, &mut self.ids)?;
        self.store.save_complaint(&complaint)?;
        info!(
            complaint_id = %complaint.id,
            department = %complaint.department,
            service = %complaint.service_type,
            user_id = %complaint.user_id,
            "Complaint submitted"
        );

        self.sync_complaint(&complaint);
        self.state.last_complaint = Some(complaint.clone());
        self.state.form = ComplaintForm::default();
        self.state.screen = Screen::Receipt;
        self.mark_dirty();
        Ok(complaint)
    }

    /// Submit using the description typed into the form.
    pub fn submit_form(&mut self) -> KioskResult<Complaint> {
        let description = self.state.form.description.clone();
        self.submit_complaint(&description)
    }

    // ========================================================================
    // Tracking
    // ========================================================================

    /// Show the status timeline for a snapshot of `complaint`.
    pub fn open_timeline(&mut self, complaint: Complaint) {
        debug!(complaint_id = %complaint.id, "Timeline opened");
        self.state.tracking = Some(complaint);
        self.mark_dirty();
    }

    pub fn close_timeline(&mut self) {
        self.state.tracking = None;
        self.mark_dirty();
    }

    /// Move complaint `id` one lifecycle step forward.
    ///
    /// Cached copies on the receipt and in the open timeline are refreshed.
    /// Advancing a Resolved complaint succeeds without writing.
    pub fn advance_status(&mut self, id: &str) -> KioskResult<Advance> {
        let outcome = lifecycle::advance(&self.store, id)?;
        let updated = outcome.complaint();

        match &outcome {
            Advance::Moved { from, .. } => {
                info!(complaint_id = %id, from = %from, to = %updated.status, "Complaint status advanced");
            }
            Advance::AlreadyResolved { .. } => {
                debug!(complaint_id = %id, "Complaint already resolved");
            }
        }

        self.sync_complaint(updated);
        self.state.refresh_snapshots(updated);
        self.mark_dirty();
        Ok(outcome)
    }

    /// Re-read the complaint list after a write. If the read fails the
    /// written complaint is patched into the snapshot instead.
    fn sync_complaint(&mut self, written: &Complaint) {
        if let Err(e) = self.refresh_complaints() {
            warn!(complaint_id = %written.id, "Complaint list reload failed: {}", e);
            match self.complaints.iter_mut().find(|c| c.id == written.id) {
                Some(cached) => *cached = written.clone(),
                None => self.complaints.push(written.clone()),
            }
        }
    }

    // ========================================================================
    // Receipt export
    // ========================================================================

    /// Save the receipt on screen as `<complaintId>.pdf`.
    pub fn export_receipt(&mut self) -> KioskResult<()> {
        self.start_export(ExportPurpose::Save)
    }

    /// Save the receipt and open it in the system viewer for printing.
    pub fn print_receipt(&mut self) -> KioskResult<()> {
        self.start_export(ExportPurpose::Print)
    }

    fn start_export(&mut self, purpose: ExportPurpose) -> KioskResult<()> {
        if self.state.export_in_progress {
            debug!("Export already running");
            return Ok(());
        }
        let complaint = self
            .state
            .last_complaint
            .clone()
            .ok_or(ExportError::NoReceipt)?;
        let dir = self.export_dir.clone();

        let job = move || -> Result<PathBuf, ExportError> {
            let path = export::export_receipt(&complaint, &dir)?;
            if purpose == ExportPurpose::Print {
                export::open_for_print(&path)?;
            }
            Ok(path)
        };

        self.state.export_in_progress = true;
        self.mark_dirty();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let tx = self.message_tx.clone();
                handle.spawn(async move {
                    let result = tokio::task::spawn_blocking(job)
                        .await
                        .unwrap_or_else(|e| {
                            Err(ExportError::TaskFailed {
                                message: e.to_string(),
                            })
                        });
                    let _ = tx.send(AppMessage::ExportFinished { purpose, result });
                });
            }
            Err(_) => {
                let result = job();
                self.handle_message(AppMessage::ExportFinished { purpose, result });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;
    use crate::config::KioskConfig;
    use crate::models::ComplaintStatus;
    use crate::storage::ComplaintStore;
    use tempfile::TempDir;

    fn app_with(backend: InMemoryStore, export_dir: &std::path::Path) -> App {
        let config = KioskConfig::default().with_export_dir(export_dir);
        App::new(ComplaintStore::new(backend), &config)
    }

    fn logged_in() -> (App, InMemoryStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let backend = InMemoryStore::new();
        let mut app = app_with(backend.clone(), temp.path());
        app.login("9876543210").unwrap();
        (app, backend, temp)
    }

    #[test]
    fn test_login_valid_mobile() {
        let (app, _backend, _temp) = logged_in();
        let user = app.current_user().unwrap();
        assert_eq!(user.mobile, "9876543210");
        assert!(user.id.starts_with("CIT-"));
        assert_eq!(app.screen(), Screen::Dashboard);
        assert_eq!(app.store().get_current_user().unwrap().as_ref(), Some(user));
    }

    #[test]
    fn test_login_short_mobile_rejected() {
        let temp = TempDir::new().unwrap();
        let backend = InMemoryStore::new();
        let mut app = app_with(backend.clone(), temp.path());
        app.navigate_to(Screen::Auth);

        let err = app.login("123").unwrap_err();
        assert_eq!(err, KioskError::Validation(ValidationError::InvalidMobile));
        assert!(app.current_user().is_none());
        assert_eq!(app.store().get_current_user().unwrap(), None);
        assert_eq!(app.screen(), Screen::Auth);
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn test_login_replaces_previous_user() {
        let (mut app, _backend, _temp) = logged_in();
        let first = app.current_user().unwrap().clone();
        app.login("9123456780").unwrap();
        let second = app.current_user().unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(second.mobile, "9123456780");
    }

    #[test]
    fn test_logout_clears_everything() {
        let (mut app, _backend, _temp) = logged_in();
        app.select_department(Department::Gas);
        app.set_description("Leak");
        app.logout().unwrap();

        assert!(app.current_user().is_none());
        assert_eq!(app.store().get_current_user().unwrap(), None);
        assert_eq!(app.screen(), Screen::Landing);
        assert!(app.state().form.is_empty());
    }

    #[test]
    fn test_logout_with_broken_storage_still_signs_out_locally() {
        let (mut app, backend, _temp) = logged_in();
        backend.set_unavailable(true);
        assert!(app.logout().is_err());
        assert!(app.current_user().is_none());
        assert_eq!(app.screen(), Screen::Landing);
    }

    #[test]
    fn test_submit_complaint_happy_path() {
        let (mut app, _backend, _temp) = logged_in();
        let user_id = app.current_user().unwrap().id.clone();

        app.select_department(Department::Electricity);
        app.select_service("Power Outage").unwrap();
        app.set_attachment_name("meter.jpg");
        let complaint = app.submit_complaint("No power since morning").unwrap();

        assert_eq!(complaint.user_id, user_id);
        assert_eq!(complaint.status, ComplaintStatus::Submitted);
        assert_eq!(complaint.attachment_name.as_deref(), Some("meter.jpg"));
        assert_eq!(app.screen(), Screen::Receipt);
        assert_eq!(app.state().last_complaint.as_ref(), Some(&complaint));
        assert!(app.state().form.is_empty());

        let stored = app.store().get_complaints().unwrap();
        assert_eq!(stored, vec![complaint]);
        assert_eq!(app.complaints(), stored.as_slice());
    }

    #[test]
    fn test_submit_without_department_is_rejected() {
        let (mut app, backend, _temp) = logged_in();
        let writes = backend.write_count();
        let err = app.submit_complaint("anything").unwrap_err();
        assert_eq!(err, KioskError::Validation(ValidationError::NoDepartment));
        assert_eq!(backend.write_count(), writes);
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_submit_without_user_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut app = app_with(InMemoryStore::new(), temp.path());
        app.select_department(Department::Gas);
        let err = app.submit_complaint("leak").unwrap_err();
        assert_eq!(err, KioskError::Validation(ValidationError::NotLoggedIn));
        assert!(app.store().get_complaints().unwrap().is_empty());
    }

    #[test]
    fn test_select_foreign_service_rejected() {
        let (mut app, _backend, _temp) = logged_in();
        app.select_department(Department::Municipal);
        assert!(app.select_service("Name Change").is_err());
        assert_eq!(app.state().form.service, None);
        app.select_service("Road Repair").unwrap();
        assert_eq!(app.state().form.service_cursor, 3);
    }

    #[test]
    fn test_advance_refreshes_snapshots() {
        let (mut app, _backend, _temp) = logged_in();
        app.select_department(Department::Gas);
        app.select_service("Leakage Report").unwrap();
        let complaint = app.submit_complaint("Smell of gas").unwrap();
        app.open_timeline(complaint.clone());

        let outcome = app.advance_status(&complaint.id).unwrap();
        assert!(outcome.changed());
        assert_eq!(
            app.state().last_complaint.as_ref().unwrap().status,
            ComplaintStatus::UnderReview
        );
        assert_eq!(
            app.state().tracking.as_ref().unwrap().status,
            ComplaintStatus::UnderReview
        );
        assert_eq!(app.complaints()[0].status, ComplaintStatus::UnderReview);
    }

    #[test]
    fn test_advance_unknown_reports_not_found() {
        let (mut app, _backend, _temp) = logged_in();
        assert_eq!(
            app.advance_status("REQ-000000").unwrap_err(),
            KioskError::not_found("REQ-000000")
        );
    }

    #[test]
    fn test_close_timeline_persists_nothing() {
        let (mut app, backend, _temp) = logged_in();
        app.select_department(Department::Gas);
        app.select_service("Name Change").unwrap();
        let complaint = app.submit_complaint("Change holder").unwrap();
        let writes = backend.write_count();
        app.open_timeline(complaint);
        app.close_timeline();
        assert!(!app.state().is_timeline_open());
        assert_eq!(backend.write_count(), writes);
    }

    #[test]
    fn test_export_without_receipt_fails() {
        let (mut app, _backend, _temp) = logged_in();
        assert_eq!(
            app.export_receipt().unwrap_err(),
            KioskError::Export(ExportError::NoReceipt)
        );
        assert!(!app.state().export_in_progress);
    }

    #[test]
    fn test_export_outside_runtime_runs_inline() {
        let (mut app, _backend, temp) = logged_in();
        app.select_department(Department::Electricity);
        app.select_service("Meter Fault").unwrap();
        let complaint = app.submit_complaint("Meter display blank").unwrap();

        app.export_receipt().unwrap();
        let expected = temp.path().join(format!("{}.pdf", complaint.id));
        assert!(expected.exists());
        assert!(!app.state().export_in_progress);
        let notice = app.state().notice.as_ref().unwrap();
        assert_eq!(notice.title, "PDF saved successfully");
    }
}
