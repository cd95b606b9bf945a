//! Timeline and notice dialogs.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{Notice, NoticeKind, Screen};
use crate::models::{Complaint, ComplaintStatus};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::DrawContext;

/// Stage list for one complaint: reached stages filled, the current one bold.
pub fn timeline_lines<'a>(complaint: &'a Complaint, ctx: &DrawContext) -> Vec<Line<'a>> {
    let theme = ctx.theme;
    let current = complaint.status.position();

    let mut lines = vec![
        Line::from(Span::styled(complaint.id.as_str(), Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            format!("{} \u{2022} {}", complaint.department.label(), complaint.service_type),
            theme.muted(),
        )),
        Line::from(""),
    ];

    for (index, status) in ComplaintStatus::ORDER.into_iter().enumerate() {
        let reached = index <= current;
        let marker = if reached { "\u{25cf}" } else { "\u{25cb}" };
        let color = if reached {
            theme.status_color(status)
        } else {
            theme.dim
        };
        let mut label = Style::default().fg(if reached { theme.text } else { theme.dim });
        if index == current {
            label = label.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(color)),
            Span::styled(status.label(), label),
        ]));
        if index + 1 < ComplaintStatus::ORDER.len() {
            lines.push(Line::from(Span::styled(" \u{2502}", Style::default().fg(color))));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Filed {}", complaint.timestamp),
        theme.muted(),
    )));
    lines
}

pub fn render_timeline(frame: &mut Frame, area: Rect, ctx: &DrawContext, complaint: &Complaint) {
    let mut lines = timeline_lines(complaint, ctx);
    if ctx.view.state.screen == Screen::Admin && !complaint.status.is_terminal() {
        lines.push(Line::from(Span::styled(
            "Press n to move to the next status",
            Style::default().fg(ctx.theme.accent),
        )));
    }

    let title = ctx.view.t().track_status;
    let config = DialogFrameConfig::new(title, lines.len() as u16).max_width(60);
    let inner = render_dialog_frame(frame, area, ctx.theme, &config);
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_notice(frame: &mut Frame, area: Rect, ctx: &DrawContext, notice: &Notice) {
    let theme = ctx.theme;
    let (icon, color) = match notice.kind {
        NoticeKind::Info => ("\u{2139}", theme.accent),
        NoticeKind::Success => ("\u{2713}", theme.success),
        NoticeKind::Error(_) => ("\u{2717}", theme.error),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(color)),
            Span::styled(notice.message.as_str(), Style::default().fg(theme.text)),
        ]),
    ];
    if let Some(hint) = &notice.hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(hint.as_str(), theme.muted())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[ OK ]", theme.selected())).alignment(Alignment::Center));

    // Room for wrapped message and hint
    let height = lines.len() as u16 + 2;
    let config = DialogFrameConfig::new(&notice.title, height).border(color);
    let inner = render_dialog_frame(frame, area, theme, &config);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
