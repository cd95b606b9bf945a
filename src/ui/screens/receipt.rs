//! Receipt shown after a successful submission.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::export::Receipt;
use crate::ui::DrawContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let theme = ctx.theme;
    let Some(complaint) = &ctx.view.state.last_complaint else {
        frame.render_widget(
            Paragraph::new("No receipt available")
                .style(theme.muted())
                .alignment(Alignment::Center),
            area,
        );
        return;
    };
    let receipt = Receipt::for_complaint(complaint, ctx.view.t());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{2713} {}", receipt.heading),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(receipt.request_id_label, theme.muted())),
        Line::from(Span::styled(
            receipt.request_id.as_str(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for field in &receipt.fields {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label), theme.muted()),
            Span::styled(field.value.as_str(), Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(receipt.note, theme.muted())));
    if ctx.view.state.export_in_progress {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Preparing PDF\u{2026}",
            Style::default().fg(theme.accent),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.success));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
