//! One module per kiosk screen.

pub mod admin;
pub mod auth;
pub mod complaint_form;
pub mod home;
pub mod landing;
pub mod receipt;
pub mod services;
pub mod status;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::DrawContext;

/// Draw a centered title and optional subtitle; returns the area below.
fn heading(frame: &mut Frame, area: Rect, ctx: &DrawContext, title: &str, subtitle: Option<&str>) -> Rect {
    let mut lines = vec![Line::from(""), Line::from(Span::styled(title, ctx.theme.title()))];
    if let Some(subtitle) = subtitle {
        lines.push(Line::from(Span::styled(subtitle, ctx.theme.muted())));
    }
    lines.push(Line::from(""));

    let height = (lines.len() as u16).min(area.height);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect { height, ..area },
    );
    Rect {
        y: area.y + height,
        height: area.height - height,
        ..area
    }
}
