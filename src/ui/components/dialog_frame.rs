//! Dialog Frame Component
//!
//! A centered modal frame used by the notice and timeline dialogs. Clears
//! whatever is underneath and returns the inner area for content.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::{centered, LayoutContext};
use crate::ui::theme::Theme;

#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
    /// Border color override, e.g. red for errors
    pub border: Option<ratatui::style::Color>,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 36,
            max_width: 72,
            border: None,
        }
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    pub fn border(mut self, color: ratatui::style::Color) -> Self {
        self.border = Some(color);
        self
    }
}

fn dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig) -> u16 {
    if ctx.is_extra_small() {
        ctx.width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
}

/// Render the frame centered in `area` and return its inner content area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    config: &DialogFrameConfig,
) -> Rect {
    let ctx = LayoutContext::from_area(area);
    let dialog_area = centered(area, dialog_width(&ctx, config), config.content_height + 2);

    frame.render_widget(Clear, dialog_area);

    let border = config.border.unwrap_or(theme.accent);
    let block = Block::default()
        .title(Span::styled(format!(" {} ", config.title), theme.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(theme.base());

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_dialog_width_by_size() {
        let config = DialogFrameConfig::new("T", 3);
        assert_eq!(dialog_width(&LayoutContext::new(40, 20), &config), 36);
        assert_eq!(dialog_width(&LayoutContext::new(200, 50), &config), 72);
    }

    #[test]
    fn test_render_returns_inner_area() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut inner = Rect::default();
        terminal
            .draw(|frame| {
                let config = DialogFrameConfig::new("Notice", 4);
                inner = render_dialog_frame(frame, frame.area(), &DARK, &config);
            })
            .unwrap();
        assert_eq!(inner.height, 4);
        assert!(inner.width >= 34);
    }
}
