//! Key and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use crate::error::{KioskError, KioskResult, ResultExt};
use crate::models::{Department, Language};
use crate::view_state::FormField;

use super::{App, AppMessage, DashboardItem, ExportPurpose, Notice, Screen};

impl App {
    /// Handle a key press.
    ///
    /// Modals take input first: an open notice swallows every key except its
    /// dismiss keys, then the timeline, then the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }
        if key.code == KeyCode::F(2) {
            self.toggle_high_contrast();
            return;
        }

        if self.state.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_notice();
            }
            return;
        }
        if self.state.tracking.is_some() {
            self.handle_timeline_key(key);
            return;
        }

        match self.state.screen {
            Screen::Landing => self.handle_landing_key(key),
            Screen::Auth => self.handle_auth_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::Services => self.handle_services_key(key),
            Screen::ComplaintForm => self.handle_form_key(key),
            Screen::Receipt => self.handle_receipt_key(key),
            Screen::Status | Screen::Admin => self.handle_list_key(key),
        }
    }

    /// Apply a message posted by a background task.
    pub fn handle_message(&mut self, message: AppMessage) {
        self.mark_dirty();
        match message {
            AppMessage::ExportFinished { purpose, result } => {
                self.state.export_in_progress = false;
                match result {
                    Ok(path) => {
                        info!(path = %path.display(), ?purpose, "Receipt exported");
                        let notice = match purpose {
                            ExportPurpose::Save => Notice::success(
                                "PDF saved successfully",
                                format!("Saved to {}", path.display()),
                            ),
                            ExportPurpose::Print => Notice::info(
                                "Receipt sent to printer",
                                format!("Opened {} for printing", path.display()),
                            ),
                        };
                        self.notify(notice);
                    }
                    Err(e) => {
                        warn!(?purpose, "Receipt export failed: {}", e);
                        self.notify(Notice::from(&KioskError::from(e)));
                    }
                }
            }
        }
    }

    /// Log a failed action and show it in the notice dialog.
    fn surface<T>(&mut self, operation: &str, result: KioskResult<T>) -> Option<T> {
        match result.log_failure(operation) {
            Ok(value) => Some(value),
            Err(err) => {
                self.notify(Notice::from(&err));
                None
            }
        }
    }

    fn handle_timeline_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_timeline(),
            KeyCode::Char('n') if self.state.screen == Screen::Admin => {
                if let Some(id) = self.state.tracking.as_ref().map(|c| c.id.clone()) {
                    self.advance_and_notify(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Char('a') => self.open_admin(),
            KeyCode::Enter => match Language::ALL.get(self.state.menu_cursor) {
                Some(language) => self.choose_language(*language),
                None => self.open_admin(),
            },
            _ => {}
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.navigate_back(),
            KeyCode::Backspace => {
                self.state.mobile_input.pop();
                self.mark_dirty();
            }
            KeyCode::Enter => {
                let result = self.submit_mobile();
                self.surface("login", result);
            }
            KeyCode::Char(c) => {
                self.state.push_mobile_digit(c);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.navigate_back(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter => match DashboardItem::ALL.get(self.state.menu_cursor) {
                Some(DashboardItem::FileComplaint) => {
                    self.navigate_to(Screen::Services);
                }
                Some(DashboardItem::TrackStatus) => {
                    self.navigate_to(Screen::Status);
                }
                Some(DashboardItem::Logout) => {
                    let result = self.logout();
                    self.surface("logout", result);
                }
                None => {}
            },
            _ => {}
        }
    }

    fn handle_services_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.navigate_back(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter => {
                if let Some(department) = Department::ALL.get(self.state.menu_cursor) {
                    self.select_department(*department);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let result = self.submit_form();
            self.surface("submit_complaint", result);
            return;
        }

        let focus = self.state.form.focus;
        match key.code {
            KeyCode::Esc => self.navigate_back(),
            KeyCode::Tab => self.state.form.focus = focus.next(),
            KeyCode::BackTab => self.state.form.focus = focus.previous(),
            KeyCode::Up if focus == FormField::Service => self.state.form.move_service_cursor(-1),
            KeyCode::Down if focus == FormField::Service => self.state.form.move_service_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') if focus == FormField::Service => {
                if let Some(service) = self.state.form.highlighted_service() {
                    let result = self.select_service(service);
                    if self.surface("select_service", result).is_some() {
                        self.state.form.focus = focus.next();
                    }
                }
            }
            KeyCode::Enter if focus == FormField::Submit => {
                let result = self.submit_form();
                self.surface("submit_complaint", result);
            }
            KeyCode::Enter if focus.accepts_text() => self.state.form.focus = focus.next(),
            KeyCode::Backspace => self.state.form.pop_char(),
            KeyCode::Char(c) if focus.accepts_text() => self.state.form.push_char(c),
            _ => {}
        }
        self.mark_dirty();
    }

    fn handle_receipt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.navigate_back(),
            KeyCode::Char('s') => {
                let result = self.export_receipt();
                self.surface("export_receipt", result);
            }
            KeyCode::Char('p') => {
                let result = self.print_receipt();
                self.surface("print_receipt", result);
            }
            KeyCode::Char('t') => {
                if let Some(complaint) = self.state.last_complaint.clone() {
                    self.open_timeline(complaint);
                }
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.navigate_back(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter => {
                if let Some(complaint) = self.highlighted_complaint() {
                    self.open_timeline(complaint);
                }
            }
            KeyCode::Char('n') if self.state.screen == Screen::Admin => {
                if let Some(complaint) = self.highlighted_complaint() {
                    self.advance_and_notify(&complaint.id);
                }
            }
            _ => {}
        }
    }

    /// The complaint under the list cursor on the status or admin screen.
    pub fn highlighted_complaint(&self) -> Option<crate::models::Complaint> {
        let ctx = self.render_context();
        let rows = match self.state.screen {
            Screen::Status => ctx.my_complaints(),
            Screen::Admin => ctx.all_complaints(),
            _ => return None,
        };
        rows.get(self.state.list_cursor).map(|c| (*c).clone())
    }

    fn advance_and_notify(&mut self, id: &str) {
        let result = self.advance_status(id);
        if let Some(outcome) = self.surface("advance_status", result) {
            let title = if outcome.changed() {
                "Status updated"
            } else {
                "Already resolved"
            };
            self.notify(Notice::success(
                title,
                format!("Status updated to {}", outcome.status()),
            ));
        }
    }
}
