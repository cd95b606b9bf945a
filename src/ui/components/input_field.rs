//! Input Field Component
//!
//! A labelled text box with a block cursor when focused and a placeholder
//! when empty.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::Theme;

#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Draw the block cursor (blinks with the tick)
    pub show_cursor: bool,
    pub placeholder: Option<&'a str>,
    /// Text rows inside the box
    pub rows: u16,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            show_cursor: false,
            placeholder: None,
            rows: 1,
        }
    }

    pub fn focused(mut self, focused: bool, show_cursor: bool) -> Self {
        self.focused = focused;
        self.show_cursor = focused && show_cursor;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }
}

/// Rows used: the label plus the bordered box.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    1 + config.rows + 2
}

/// Longest suffix of `value` that fits in `width` columns.
///
/// Single-row fields scroll so the end being typed stays visible.
pub fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (index, ch) in value.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    &value[start..]
}

/// Render the field at the top of `area` and return the height consumed.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    config: &InputFieldConfig,
) -> u16 {
    let height = calculate_input_field_height(config).min(area.height);
    if height < 2 {
        return 0;
    }

    let label_style = if config.focused {
        theme.title()
    } else {
        theme.muted()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        Rect { height: 1, ..area },
    );

    let box_area = Rect {
        y: area.y + 1,
        height: height - 1,
        ..area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(config.focused))
        .style(Style::default().bg(theme.input_bg));

    let mut spans = Vec::new();
    match config.placeholder {
        Some(placeholder) if config.value.is_empty() && !config.focused => {
            spans.push(Span::styled(placeholder, theme.muted()));
        }
        _ => {
            let value = if config.rows == 1 {
                // borders plus the cursor cell
                visible_tail(config.value, usize::from(box_area.width.saturating_sub(3)))
            } else {
                config.value
            };
            spans.push(Span::styled(value, Style::default().fg(theme.text)));
        }
    }
    if config.show_cursor {
        spans.push(Span::styled("\u{2588}", Style::default().fg(theme.accent)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false }),
        box_area,
    );
    height
}
