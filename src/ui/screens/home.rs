//! Citizen dashboard.

use ratatui::{layout::Rect, Frame};

use crate::app::DashboardItem;
use crate::ui::components::{render_menu, MenuItem};
use crate::ui::DrawContext;

use super::heading;

pub fn render(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let t = ctx.view.t();
    let count = ctx.view.my_complaints().len();
    let greeting = match ctx.view.current_user {
        Some(user) => format!("{} {}", user.name, user.id),
        None => String::new(),
    };
    let rest = heading(frame, area, ctx, t.home_title, Some(greeting.as_str()));

    let items: Vec<MenuItem> = DashboardItem::ALL
        .into_iter()
        .map(|item| match item {
            DashboardItem::FileComplaint => {
                MenuItem::new(t.file_complaint).detail("Electricity, gas and municipal services")
            }
            DashboardItem::TrackStatus => {
                MenuItem::new(t.track_status).detail(format!("{count} request(s) on file"))
            }
            DashboardItem::Logout => MenuItem::new("Logout"),
        })
        .collect();

    render_menu(frame, rest, ctx.theme, &items, ctx.view.state.menu_cursor);
}
