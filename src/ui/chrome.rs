//! Header and footer drawn around every screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Screen;

use super::DrawContext;

pub fn render_header(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let theme = ctx.theme;
    let state = ctx.view.state;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(
            " SUVIDHA ",
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Civic Services Kiosk", theme.muted()),
    ]);
    frame.render_widget(Paragraph::new(title), inner);

    let mut session = vec![Span::styled(state.language.native_name(), theme.muted())];
    if state.high_contrast {
        session.push(Span::styled("  HC", Style::default().fg(theme.accent)));
    }
    session.push(Span::raw("  "));
    match ctx.view.current_user {
        Some(user) => {
            session.push(Span::styled(user.id.as_str(), theme.title()));
            session.push(Span::styled(format!(" ({})", user.masked_mobile()), theme.muted()));
        }
        None if state.screen == Screen::Admin => {
            session.push(Span::styled("Official", theme.title()));
        }
        None => session.push(Span::styled("Not signed in", theme.muted())),
    }
    session.push(Span::raw(" "));
    frame.render_widget(
        Paragraph::new(Line::from(session)).alignment(Alignment::Right),
        inner,
    );
}

pub fn render_footer(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let hints = key_hints(ctx);
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", ctx.theme.muted()));
        }
        spans.push(Span::styled(*key, Style::default().fg(ctx.theme.accent)));
        spans.push(Span::styled(format!(" {action}"), ctx.theme.muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for the current screen, or the modal on top of it.
fn key_hints(ctx: &DrawContext) -> Vec<(&'static str, &'static str)> {
    let state = ctx.view.state;
    let t = ctx.view.t();

    if state.notice.is_some() {
        return vec![("Enter", "OK")];
    }
    if state.tracking.is_some() {
        let mut hints = vec![("Esc", t.close)];
        if state.screen == Screen::Admin {
            hints.push(("n", "Next status"));
        }
        return hints;
    }

    let mut hints = match state.screen {
        Screen::Landing => vec![("\u{2191}\u{2193}", "Choose"), ("Enter", "Select"), ("a", t.admin_login)],
        Screen::Auth => vec![("0-9", "Type"), ("Enter", t.verify_otp), ("Esc", t.back)],
        Screen::Dashboard => vec![("\u{2191}\u{2193}", "Choose"), ("Enter", "Select"), ("Esc", "Logout")],
        Screen::Services => vec![("\u{2191}\u{2193}", "Choose"), ("Enter", "Select"), ("Esc", t.back)],
        Screen::ComplaintForm => vec![("Tab", "Next field"), ("Ctrl+S", t.submit), ("Esc", t.back)],
        Screen::Receipt => vec![("p", "Print"), ("s", "Save PDF"), ("t", t.track_status), ("Enter", "Home")],
        Screen::Status => vec![("\u{2191}\u{2193}", "Choose"), ("Enter", "Timeline"), ("Esc", t.back)],
        Screen::Admin => vec![("\u{2191}\u{2193}", "Choose"), ("Enter", "Timeline"), ("n", "Next status"), ("Esc", t.back)],
    };
    hints.push(("F2", "Contrast"));
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Notice;
    use crate::view_state::{RenderContext, ViewState};

    #[test]
    fn test_notice_overrides_screen_hints() {
        let state = ViewState {
            screen: Screen::Receipt,
            notice: Some(Notice::info("a", "b")),
            ..ViewState::default()
        };
        let ctx = DrawContext::new(RenderContext::new(&state, None, &[]), false);
        assert_eq!(key_hints(&ctx), vec![("Enter", "OK")]);
    }

    #[test]
    fn test_admin_timeline_offers_advance() {
        let state = ViewState {
            screen: Screen::Admin,
            tracking: Some(crate::models::Complaint {
                id: "REQ-1".to_string(),
                department: crate::models::Department::Gas,
                service_type: "Name Change".to_string(),
                description: "d".to_string(),
                status: crate::models::ComplaintStatus::Submitted,
                timestamp: "t".to_string(),
                user_id: "u".to_string(),
                attachment_name: None,
            }),
            ..ViewState::default()
        };
        let ctx = DrawContext::new(RenderContext::new(&state, None, &[]), false);
        assert!(key_hints(&ctx).contains(&("n", "Next status")));
    }
}
