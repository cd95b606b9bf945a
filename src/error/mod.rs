//! Error handling for the kiosk.
//!
//! Every store, lifecycle and view-controller operation returns an explicit
//! result; nothing is reported through side channels. The presentation layer
//! turns a [`KioskError`] into a notice dialog.
//!
//! | Category | Raised by | Shown as |
//! |----------|-----------|----------|
//! | User | malformed mobile, missing selection | blocking notice, state unchanged |
//! | NotFound | unknown complaint id | notice, nothing mutated |
//! | External | PDF export / print hand-off | notice with manual fallback |
//! | System | storage unavailable, quota, corrupt record | notice |
//! | Client | unknown status tag | notice |
//!
//! # Example
//!
//! ```ignore
//! use suvidha::error::{KioskResult, ResultExt};
//!
//! fn advance(app: &mut App, id: &str) -> KioskResult<()> {
//!     app.advance_status(id).log_failure("advance_status")?;
//!     Ok(())
//! }
//! ```

mod category;
mod export;
mod kiosk_error;
mod result;
mod storage;
mod validation;

pub use category::ErrorCategory;
pub use export::ExportError;
pub use kiosk_error::KioskError;
pub use result::{KioskResult, ResultExt};
pub use storage::{classify_io_error, StorageError};
pub use validation::ValidationError;
