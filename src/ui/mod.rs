//! Terminal UI for the SUVIDHA kiosk.
//!
//! Every frame is a pure function of [`RenderContext`]: a header with the
//! session, the active screen in a centered column, a key hint footer and,
//! on top, the timeline or notice modal.

pub mod components;
mod chrome;
mod layout;
mod modals;
mod screens;
mod theme;

pub use layout::{breakpoints, centered, LayoutContext};
pub use theme::{Theme, DARK, HIGH_CONTRAST};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::Block,
    Frame,
};

use crate::app::{App, Screen};
use crate::view_state::RenderContext;

/// Everything a screen needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct DrawContext<'a> {
    pub view: RenderContext<'a>,
    pub theme: &'static Theme,
    /// Blink phase for text cursors
    pub cursor_visible: bool,
}

impl<'a> DrawContext<'a> {
    pub fn new(view: RenderContext<'a>, cursor_visible: bool) -> Self {
        Self {
            view,
            theme: Theme::for_contrast(view.state.high_contrast),
            cursor_visible,
        }
    }
}

/// Render the whole kiosk for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let ctx = DrawContext::new(app.render_context(), app.cursor_visible());
    render_with(frame, &ctx);
}

/// Render from an explicit context; used by tests and benchmarks.
pub fn render_with(frame: &mut Frame, ctx: &DrawContext) {
    let area = frame.area();
    frame.render_widget(Block::default().style(ctx.theme.base()), area);

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    chrome::render_header(frame, header, ctx);
    render_screen(frame, content_column(body), ctx);
    chrome::render_footer(frame, footer, ctx);

    if let Some(complaint) = &ctx.view.state.tracking {
        modals::render_timeline(frame, area, ctx, complaint);
    }
    if let Some(notice) = &ctx.view.state.notice {
        modals::render_notice(frame, area, ctx, notice);
    }
}

fn render_screen(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    match ctx.view.state.screen {
        Screen::Landing => screens::landing::render(frame, area, ctx),
        Screen::Auth => screens::auth::render(frame, area, ctx),
        Screen::Dashboard => screens::home::render(frame, area, ctx),
        Screen::Services => screens::services::render(frame, area, ctx),
        Screen::ComplaintForm => screens::complaint_form::render(frame, area, ctx),
        Screen::Receipt => screens::receipt::render(frame, area, ctx),
        Screen::Status => screens::status::render(frame, area, ctx),
        Screen::Admin => screens::admin::render(frame, area, ctx),
    }
}

/// The centered column screens draw into.
fn content_column(body: Rect) -> Rect {
    let width = LayoutContext::from_area(body).content_width();
    Rect {
        x: body.x + (body.width.saturating_sub(width)) / 2,
        width: width.min(body.width),
        ..body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Notice;
    use crate::models::{Complaint, ComplaintStatus, Department, User};
    use crate::view_state::ViewState;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &ViewState, user: Option<&User>, complaints: &[Complaint]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = DrawContext::new(RenderContext::new(state, user, complaints), true);
                render_with(frame, &ctx);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn complaint(id: &str, user: &str, status: ComplaintStatus) -> Complaint {
        Complaint {
            id: id.to_string(),
            department: Department::Electricity,
            service_type: "Power Outage".to_string(),
            description: "No power".to_string(),
            status,
            timestamp: "01/02/2025, 10:00:00".to_string(),
            user_id: user.to_string(),
            attachment_name: None,
        }
    }

    #[test]
    fn test_every_screen_renders() {
        let user = User::citizen("CIT-ABCDE", "9876543210");
        let complaints = vec![complaint("REQ-111111", "CIT-ABCDE", ComplaintStatus::Assigned)];
        for screen in [
            Screen::Landing,
            Screen::Auth,
            Screen::Dashboard,
            Screen::Services,
            Screen::ComplaintForm,
            Screen::Receipt,
            Screen::Status,
            Screen::Admin,
        ] {
            for high_contrast in [false, true] {
                let state = ViewState {
                    screen,
                    high_contrast,
                    last_complaint: complaints.first().cloned(),
                    ..ViewState::default()
                };
                draw(&state, Some(&user), &complaints);
            }
        }
    }

    #[test]
    fn test_landing_shows_welcome() {
        let text = draw(&ViewState::default(), None, &[]);
        assert!(text.contains("Welcome to SUVIDHA"));
        assert!(text.contains("Official Login"));
    }

    #[test]
    fn test_header_shows_citizen_id() {
        let user = User::citizen("CIT-ABCDE", "9876543210");
        let state = ViewState {
            screen: Screen::Dashboard,
            ..ViewState::default()
        };
        assert!(draw(&state, Some(&user), &[]).contains("CIT-ABCDE"));
    }

    #[test]
    fn test_status_lists_only_own_complaints() {
        let user = User::citizen("CIT-ABCDE", "9876543210");
        let complaints = vec![
            complaint("REQ-111111", "CIT-ABCDE", ComplaintStatus::Submitted),
            complaint("REQ-222222", "CIT-OTHER", ComplaintStatus::Submitted),
        ];
        let state = ViewState {
            screen: Screen::Status,
            ..ViewState::default()
        };
        let text = draw(&state, Some(&user), &complaints);
        assert!(text.contains("REQ-111111"));
        assert!(!text.contains("REQ-222222"));
    }

    #[test]
    fn test_timeline_modal_shows_stages() {
        let c = complaint("REQ-333333", "CIT-ABCDE", ComplaintStatus::UnderReview);
        let state = ViewState {
            screen: Screen::Status,
            tracking: Some(c.clone()),
            ..ViewState::default()
        };
        let text = draw(&state, None, &[c]);
        for status in ComplaintStatus::ORDER {
            assert!(text.contains(status.label()));
        }
    }

    #[test]
    fn test_notice_modal_on_top() {
        let state = ViewState {
            notice: Some(Notice::info("Heads up", "PDF saved successfully")),
            ..ViewState::default()
        };
        let text = draw(&state, None, &[]);
        assert!(text.contains("PDF saved successfully"));
    }
}
