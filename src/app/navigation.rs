//! Navigation methods for the App.

use tracing::debug;

use crate::models::{Department, Language};

use super::{App, DashboardItem, Screen};

/// Logical parent of `screen` for the back action.
///
/// `None` for the landing screen, which has nowhere to go back to.
pub fn parent_of(screen: Screen) -> Option<Screen> {
    match screen {
        Screen::Landing => None,
        Screen::Auth | Screen::Dashboard | Screen::Admin => Some(Screen::Landing),
        Screen::Services | Screen::Status | Screen::Receipt => Some(Screen::Dashboard),
        Screen::ComplaintForm => Some(Screen::Services),
    }
}

impl App {
    /// Switch screens, resetting cursors and closing the timeline.
    ///
    /// Citizen screens require a logged-in user; without one the kiosk shows
    /// the login screen instead. List screens re-read the complaint store so
    /// they show what other kiosks on the same data directory wrote. Returns
    /// the screen actually shown.
    pub fn navigate_to(&mut self, screen: Screen) -> Screen {
        let target = if screen.is_public() || self.current_user.is_some() {
            screen
        } else {
            debug!(?screen, "No citizen logged in, redirecting to login");
            Screen::Auth
        };

        self.state.screen = target;
        self.state.menu_cursor = 0;
        self.state.list_cursor = 0;
        self.state.tracking = None;
        if matches!(target, Screen::Status | Screen::Admin) {
            let result = self.refresh_complaints();
            self.report_result(result);
        }
        self.mark_dirty();
        target
    }

    /// Go to the logical parent of the current screen.
    ///
    /// Leaving the dashboard ends the session, and leaving the login screen
    /// discards the typed number.
    pub fn navigate_back(&mut self) {
        let current = self.state.screen;
        let Some(parent) = parent_of(current) else {
            return;
        };

        match current {
            Screen::Dashboard => {
                let result = self.logout();
                self.report_result(result);
            }
            Screen::Auth => {
                self.state.mobile_input.clear();
                self.navigate_to(parent);
            }
            _ => {
                self.navigate_to(parent);
            }
        }
    }

    pub fn open_admin(&mut self) {
        self.navigate_to(Screen::Admin);
    }

    /// Number of entries in the current screen's menu.
    pub fn menu_len(&self) -> usize {
        match self.state.screen {
            Screen::Landing => Language::ALL.len() + 1,
            Screen::Dashboard => DashboardItem::ALL.len(),
            Screen::Services => Department::ALL.len(),
            _ => 0,
        }
    }

    /// Number of rows in the current screen's complaint list.
    pub fn list_len(&self) -> usize {
        let ctx = self.render_context();
        match self.state.screen {
            Screen::Status => ctx.my_complaints().len(),
            Screen::Admin => self.complaints.len(),
            _ => 0,
        }
    }

    pub fn move_up(&mut self) {
        if self.menu_len() > 0 {
            self.state.menu_cursor = self.state.menu_cursor.saturating_sub(1);
        } else {
            self.state.list_cursor = self.state.list_cursor.saturating_sub(1);
        }
        self.mark_dirty();
    }

    pub fn move_down(&mut self) {
        let menu = self.menu_len();
        if menu > 0 {
            if self.state.menu_cursor + 1 < menu {
                self.state.menu_cursor += 1;
            }
        } else {
            let rows = self.list_len();
            if self.state.list_cursor + 1 < rows {
                self.state.list_cursor += 1;
            }
        }
        self.mark_dirty();
    }
}
