//! Department selection.

use ratatui::{layout::Rect, Frame};

use crate::models::Department;
use crate::ui::components::{render_menu, MenuItem};
use crate::ui::DrawContext;

use super::heading;

pub fn render(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let t = ctx.view.t();
    let rest = heading(frame, area, ctx, t.file_complaint, Some("Select a department"));

    let items: Vec<MenuItem> = Department::ALL
        .into_iter()
        .map(|dept| MenuItem::new(dept.label()).detail(dept.services().join(", ")))
        .collect();

    render_menu(frame, rest, ctx.theme, &items, ctx.view.state.menu_cursor);
}
