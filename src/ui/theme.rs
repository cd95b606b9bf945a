//! Color palettes for the kiosk UI.
//!
//! The default palette is dark with soft accents. The high-contrast palette
//! (toggled with F2) uses pure black, white and yellow for low-vision users.

use ratatui::style::{Color, Modifier, Style};

use crate::models::ComplaintStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    /// Highlighted menu row
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub success: Color,
    pub error: Color,
    pub input_bg: Color,
    pub high_contrast: bool,
}

pub const DARK: Theme = Theme {
    background: Color::Rgb(9, 9, 11),
    text: Color::White,
    dim: Color::DarkGray,
    border: Color::DarkGray,
    accent: Color::Rgb(96, 165, 250),
    selection_fg: Color::White,
    selection_bg: Color::Rgb(37, 99, 235),
    success: Color::Rgb(22, 163, 74),
    error: Color::Red,
    input_bg: Color::Rgb(20, 20, 30),
    high_contrast: false,
};

pub const HIGH_CONTRAST: Theme = Theme {
    background: Color::Black,
    text: Color::White,
    dim: Color::White,
    border: Color::Yellow,
    accent: Color::Yellow,
    selection_fg: Color::Black,
    selection_bg: Color::Yellow,
    success: Color::Yellow,
    error: Color::LightRed,
    input_bg: Color::Black,
    high_contrast: true,
};

impl Theme {
    pub fn for_contrast(high_contrast: bool) -> &'static Theme {
        if high_contrast {
            &HIGH_CONTRAST
        } else {
            &DARK
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.accent } else { self.border };
        Style::default().fg(color)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Badge color for a lifecycle status.
    pub fn status_color(&self, status: ComplaintStatus) -> Color {
        if self.high_contrast {
            return match status {
                ComplaintStatus::Resolved => Color::Yellow,
                _ => Color::White,
            };
        }
        match status {
            ComplaintStatus::Submitted => Color::Rgb(96, 165, 250),
            ComplaintStatus::UnderReview => Color::Rgb(250, 204, 21),
            ComplaintStatus::Assigned => Color::Rgb(192, 132, 252),
            ComplaintStatus::Resolved => self.success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_contrast() {
        assert!(Theme::for_contrast(true).high_contrast);
        assert!(!Theme::for_contrast(false).high_contrast);
    }

    #[test]
    fn test_high_contrast_status_colors_are_limited() {
        let theme = Theme::for_contrast(true);
        for status in ComplaintStatus::ORDER {
            assert!(matches!(
                theme.status_color(status),
                Color::White | Color::Yellow
            ));
        }
    }
}
