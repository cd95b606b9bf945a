//! Command-line interface.
//!
//! Called early in `main()` to handle informational flags before the TUI
//! takes over the terminal:
//!
//! ```ignore
//! use suvidha::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     // Informational command handled; exit with result
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage_text, version_text, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command if it does not need the TUI.
///
/// * `None` - the command is `Run`; start the kiosk
/// * `Some(Ok(()))` - an informational command printed its output
/// * `Some(Err(e))` - the arguments were invalid
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", usage_text());
            Some(Ok(()))
        }
        CliCommand::Invalid { message } => Some(Err(eyre!("{message}\n\n{}", usage_text()))),
        CliCommand::Run { .. } => None,
    }
}
