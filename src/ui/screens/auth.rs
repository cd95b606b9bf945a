//! Mobile number login.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::{render_input_field, InputFieldConfig};
use crate::ui::DrawContext;
use crate::view_state::MOBILE_INPUT_MAX;

use super::heading;

pub fn render(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let t = ctx.view.t();
    let state = ctx.view.state;
    let rest = heading(frame, area, ctx, t.login_title, None);

    let config = InputFieldConfig::new(t.enter_mobile, &state.mobile_input)
        .focused(true, ctx.cursor_visible)
        .placeholder("98XXXXXXXX");
    let used = render_input_field(frame, rest, ctx.theme, &config);

    let typed = state.mobile_input.len();
    let counter_style = if typed == MOBILE_INPUT_MAX {
        ratatui::style::Style::default().fg(ctx.theme.success)
    } else {
        ctx.theme.muted()
    };
    let info = vec![
        Line::from(Span::styled(format!("{typed}/{MOBILE_INPUT_MAX} digits"), counter_style)),
        Line::from(""),
        Line::from(Span::styled(format!("Enter: {}", t.verify_otp), ctx.theme.muted())),
    ];
    let below = Rect {
        y: rest.y + used,
        height: rest.height.saturating_sub(used),
        ..rest
    };
    frame.render_widget(Paragraph::new(info), below);
}
