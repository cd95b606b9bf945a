//! View controller for the kiosk.
//!
//! [`App`] owns the transient [`ViewState`] and the [`ComplaintStore`], and
//! exposes one named action per user intent. Actions return explicit results;
//! the key handlers decide how to surface failures (see [`App::report`]).

mod actions;
mod handlers;
mod navigation;
mod types;

pub use navigation::parent_of;
pub use types::{AppMessage, DashboardItem, ExportPurpose, Notice, NoticeKind, Screen};

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::KioskConfig;
use crate::error::{KioskError, KioskResult};
use crate::lifecycle::RequestIdGenerator;
use crate::models::{Complaint, User};
use crate::storage::ComplaintStore;
use crate::view_state::{RenderContext, ViewState};

/// Main application state
pub struct App {
    /// Transient UI state; mutate through actions only
    state: ViewState,
    store: ComplaintStore,
    ids: RequestIdGenerator,
    /// Read-through copy of the persisted current user
    current_user: Option<User>,
    /// Read-through copy of the persisted complaint list, oldest first
    complaints: Vec<Complaint>,
    export_dir: PathBuf,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Set whenever state changed and the screen must be redrawn
    pub needs_redraw: bool,
    /// Tick counter for the cursor blink
    pub tick_count: u64,
    /// Sender for background task results
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the app over `store`, starting on the landing screen.
    ///
    /// A citizen session left over from a previous run is ended rather than
    /// resumed, so the next person at the kiosk has to log in. A store that
    /// cannot be read does not prevent startup; the failure is shown as a
    /// notice and the kiosk starts with no data.
    pub fn new(store: ComplaintStore, config: &KioskConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: ViewState::new(config.language),
            store,
            ids: RequestIdGenerator::new(),
            current_user: None,
            complaints: Vec::new(),
            export_dir: config.export_dir.clone(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
        };

        if let Err(e) = app.end_stale_session() {
            app.report(&e);
        }
        if let Err(e) = app.refresh_complaints() {
            app.report(&e);
        }
        app
    }

    /// Clear a persisted user that nobody logged in to this run.
    fn end_stale_session(&mut self) -> KioskResult<()> {
        if let Some(user) = self.store.get_current_user()? {
            debug!(user_id = %user.id, "Ending session left from previous run");
            self.store.set_current_user(None)?;
        }
        Ok(())
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Snapshot of every stored complaint, oldest first
    pub fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }

    pub fn store(&self) -> &ComplaintStore {
        &self.store
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.state, self.current_user.as_ref(), &self.complaints)
    }

    /// Reload the complaint snapshot from the store.
    pub fn refresh_complaints(&mut self) -> KioskResult<()> {
        self.complaints = self.store.get_complaints()?;
        self.ids.seed(self.complaints.iter().map(|c| c.id.clone()));
        Ok(())
    }

    /// Show `err` in the notice dialog.
    pub fn report(&mut self, err: &KioskError) {
        warn!(code = err.error_code(), "{}", err);
        self.state.notice = Some(Notice::from(err));
        self.mark_dirty();
    }

    /// Surface the error of `result`, if any, and discard the value.
    pub fn report_result<T>(&mut self, result: KioskResult<T>) {
        if let Err(err) = result {
            self.report(&err);
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.state.notice = Some(notice);
        self.mark_dirty();
    }

    pub fn dismiss_notice(&mut self) {
        self.state.notice = None;
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        // Cursor blinks every 500ms at the 50ms tick rate
        if self.tick_count % 10 == 0 && matches!(self.state.screen, Screen::Auth | Screen::ComplaintForm) {
            self.mark_dirty();
        }
    }

    pub fn cursor_visible(&self) -> bool {
        (self.tick_count / 10) % 2 == 0
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
