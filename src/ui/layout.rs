//! Responsive layout helpers.
//!
//! Kiosk terminals vary from small panel displays to full monitors, so
//! screens size their content from a [`LayoutContext`] instead of fixed
//! column counts.

use ratatui::layout::Rect;

/// Terminal width breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Narrow terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_area(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// `percentage` of the terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// `percentage` of the width clamped to `[min, max]` and to the terminal.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max).min(self.width)
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Width of the central content column.
    pub fn content_width(&self) -> u16 {
        if self.is_extra_small() {
            self.width.saturating_sub(2)
        } else if self.is_narrow() {
            self.bounded_width(90, 40, 76)
        } else {
            self.bounded_width(70, 60, 100)
        }
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(LayoutContext::new(1, 1).percent_width(10), 1);
    }

    #[test]
    fn test_bounded_width_never_exceeds_terminal() {
        let ctx = LayoutContext::new(30, 20);
        assert_eq!(ctx.bounded_width(50, 40, 60), 30);
    }

    #[test]
    fn test_content_width_by_breakpoint() {
        assert_eq!(LayoutContext::new(50, 20).content_width(), 48);
        assert_eq!(LayoutContext::new(70, 24).content_width(), 63);
        assert_eq!(LayoutContext::new(200, 50).content_width(), 100);
    }

    #[test]
    fn test_centered_is_clipped() {
        let area = Rect::new(10, 5, 40, 10);
        let rect = centered(area, 20, 4);
        assert_eq!(rect, Rect::new(20, 8, 20, 4));
        assert_eq!(centered(area, 100, 100), area);
    }
}
