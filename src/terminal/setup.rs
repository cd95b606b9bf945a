//! Entering and leaving kiosk mode.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use std::io::{self, Write};

const WINDOW_TITLE: &str = "SUVIDHA Kiosk";

/// Switch `writer` to the alternate screen with a hidden cursor.
///
/// Raw mode is enabled separately by the caller.
pub fn enter_kiosk_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, SetTitle(WINDOW_TITLE), Hide)
}

/// Return the terminal to normal mode. Never fails; safe to call twice.
pub fn leave_kiosk_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore of stdout, for panic paths.
pub fn emergency_restore() {
    leave_kiosk_mode(&mut io::stdout());
}
