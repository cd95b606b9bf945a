//! The citizen's own requests.

use ratatui::{layout::Rect, Frame};

use crate::ui::DrawContext;

use super::{admin::complaint_table, heading};

pub fn render(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let t = ctx.view.t();
    let rest = heading(frame, area, ctx, t.track_status, Some("Enter opens the timeline"));
    let rows = ctx.view.my_complaints();
    complaint_table(frame, rest, ctx, &rows, false);
}
