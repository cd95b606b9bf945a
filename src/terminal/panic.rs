//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a hook that logs the panic and restores the terminal before the
/// previous hook prints the message.
///
/// Call before creating the [`super::TerminalManager`].
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("Kiosk panicked: {}", panic_info);
        emergency_restore();
        original_hook(panic_info);
    }));
}
