//! Complaint form: service, description, attachment name, submit.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::components::{render_input_field, InputFieldConfig};
use crate::ui::DrawContext;
use crate::view_state::{ComplaintForm, FormField};

use super::heading;

pub fn render(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let t = ctx.view.t();
    let form = &ctx.view.state.form;
    let title = form.department.map(|d| d.label()).unwrap_or(t.file_complaint);
    let rest = heading(frame, area, ctx, title, Some(t.file_complaint));

    let service_rows = form.services().len() as u16 + 2;
    let [services, description, attachment, submit] = Layout::vertical([
        Constraint::Length(service_rows + 1),
        Constraint::Length(7),
        Constraint::Length(4),
        Constraint::Length(3),
    ])
    .areas(rest);

    render_services(frame, services, ctx, form);

    let focus = form.focus;
    let description_config = InputFieldConfig::new("Description", &form.description)
        .focused(focus == FormField::Description, ctx.cursor_visible)
        .placeholder("Describe the problem")
        .rows(4);
    render_input_field(frame, description, ctx.theme, &description_config);

    let attachment_config = InputFieldConfig::new("Attachment (file name, optional)", &form.attachment_name)
        .focused(focus == FormField::Attachment, ctx.cursor_visible)
        .placeholder("e.g. meter_photo.jpg");
    render_input_field(frame, attachment, ctx.theme, &attachment_config);

    let submit_style = if focus == FormField::Submit {
        ctx.theme.selected()
    } else {
        Style::default().fg(ctx.theme.text)
    };
    let button = Paragraph::new(Line::from(Span::styled(t.submit, submit_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(ctx.theme.border_style(focus == FormField::Submit)),
        );
    frame.render_widget(button, submit);
}

fn render_services(frame: &mut Frame, area: Rect, ctx: &DrawContext, form: &ComplaintForm) {
    let theme = ctx.theme;
    let focused = form.focus == FormField::Service;

    let lines: Vec<Line> = form
        .services()
        .iter()
        .enumerate()
        .map(|(index, service)| {
            let chosen = form.service.as_deref() == Some(*service);
            let marker = if chosen { "\u{2713} " } else { "  " };
            let style = if focused && index == form.service_cursor {
                theme.selected()
            } else if chosen {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(Span::styled(format!("{marker}{service}"), style))
        })
        .collect();

    let label_style = if focused { theme.title() } else { theme.muted() };
    frame.render_widget(
        Paragraph::new(Span::styled("Service type", label_style)),
        Rect { height: 1, ..area },
    );
    let list_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(focused)),
        ),
        list_area,
    );
}
