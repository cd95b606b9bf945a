//! Menu Component
//!
//! Large, touch-friendly entries stacked vertically, one highlighted.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// Second line under the label
    pub detail: Option<String>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn height(&self) -> u16 {
        if self.detail.is_some() {
            4
        } else {
            3
        }
    }
}

/// Render `items` top-down in `area`, highlighting `selected`.
///
/// Entries that do not fit are skipped so the selection stays visible.
pub fn render_menu(frame: &mut Frame, area: Rect, theme: &Theme, items: &[MenuItem], selected: usize) {
    let total: u16 = items.iter().map(MenuItem::height).sum();
    let skip = if total > area.height {
        selected.saturating_sub(usize::from(area.height / 4).saturating_sub(1))
    } else {
        0
    };

    let mut y = area.y;
    for (index, item) in items.iter().enumerate().skip(skip) {
        let height = item.height();
        if y + height > area.y + area.height {
            break;
        }
        let is_selected = index == selected;
        let (style, marker) = if is_selected {
            (theme.selected(), "\u{25b6} ")
        } else {
            (Style::default().fg(theme.text), "  ")
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(marker, style),
            Span::styled(item.label.as_str(), style),
        ])];
        if let Some(detail) = &item.detail {
            lines.push(Line::from(Span::styled(format!("  {detail}"), theme.muted())));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(is_selected));
        let paragraph = Paragraph::new(lines).block(block).style(if is_selected {
            Style::default().bg(theme.selection_bg)
        } else {
            Style::default()
        });

        frame.render_widget(paragraph, Rect { y, height, ..area });
        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_menu_marks_selection() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let items = vec![MenuItem::new("English"), MenuItem::new("हिन्दी")];
        terminal
            .draw(|frame| render_menu(frame, frame.area(), &DARK, &items, 1))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row4: String = (0..40).map(|x| buffer[(x, 4)].symbol().to_string()).collect();
        assert!(row4.contains('\u{25b6}'));
    }

    #[test]
    fn test_menu_item_height() {
        assert_eq!(MenuItem::new("a").height(), 3);
        assert_eq!(MenuItem::new("a").detail("b").height(), 4);
    }
}
