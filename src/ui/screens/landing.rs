//! Language selection and the official login entry.

use ratatui::{layout::Rect, Frame};

use crate::models::Language;
use crate::ui::components::{render_menu, MenuItem};
use crate::ui::DrawContext;

use super::heading;

pub fn render(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let t = ctx.view.t();
    let rest = heading(frame, area, ctx, t.welcome, Some(t.select_language));

    let mut items: Vec<MenuItem> = Language::ALL
        .into_iter()
        .map(|lang| MenuItem::new(lang.native_name()).detail(lang.translation().welcome))
        .collect();
    items.push(MenuItem::new(t.admin_login).detail("Department staff"));

    render_menu(frame, rest, ctx.theme, &items, ctx.view.state.menu_cursor);
}
