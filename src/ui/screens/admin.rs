//! Staff view: request volume per department and every complaint.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::Complaint;
use crate::ui::DrawContext;

use super::heading;

pub fn render(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let rest = heading(frame, area, ctx, "Department Dashboard", Some("Request volume and status control"));
    let [chart, table] = Layout::vertical([Constraint::Length(10), Constraint::Min(4)]).areas(rest);

    render_volume_chart(frame, chart, ctx);
    let rows = ctx.view.all_complaints();
    complaint_table(frame, table, ctx, &rows, true);
}

fn render_volume_chart(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let theme = ctx.theme;
    let bars: Vec<Bar> = ctx
        .view
        .department_volume()
        .into_iter()
        .map(|v| {
            Bar::default()
                .value(v.count)
                .label(Line::from(v.department.short_label()))
                .style(Style::default().fg(theme.accent))
                .value_style(theme.selected())
        })
        .collect();

    let bar_width = (area.width.saturating_sub(8) / 3).clamp(3, 16);
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Requests by department ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(false)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2);
    frame.render_widget(chart, area);
}

/// Complaint list with the row under the list cursor highlighted.
///
/// `show_citizen` adds the owning citizen id column for staff.
pub fn complaint_table(frame: &mut Frame, area: Rect, ctx: &DrawContext, complaints: &[&Complaint], show_citizen: bool) {
    let theme = ctx.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(true));

    if complaints.is_empty() {
        frame.render_widget(
            Paragraph::new("No requests yet").style(theme.muted()).block(block),
            area,
        );
        return;
    }

    let rows: Vec<Row> = complaints
        .iter()
        .map(|c| {
            let mut cells = vec![
                Cell::from(c.id.as_str()),
                Cell::from(c.department.short_label()),
                Cell::from(c.service_type.as_str()),
                Cell::from(c.status.label()).style(Style::default().fg(theme.status_color(c.status))),
                Cell::from(c.timestamp.as_str()),
            ];
            if show_citizen {
                cells.insert(1, Cell::from(c.user_id.as_str()));
            }
            Row::new(cells)
        })
        .collect();

    let mut header = vec!["Request", "Dept", "Service", "Status", "Filed"];
    let mut widths = vec![
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(20),
    ];
    if show_citizen {
        header.insert(1, "Citizen");
        widths.insert(1, Constraint::Length(9));
    }

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(theme.title().add_modifier(Modifier::UNDERLINED)))
        .row_highlight_style(theme.selected())
        .highlight_symbol("\u{25b6} ")
        .block(block);

    let mut state = TableState::default().with_selected(Some(ctx.view.state.list_cursor.min(complaints.len() - 1)));
    frame.render_stateful_widget(table, area, &mut state);
}
