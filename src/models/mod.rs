//! Domain vocabulary shared by the store, lifecycle engine and UI.

mod complaint;
mod department;
mod language;
mod status;
mod user;

pub use complaint::{Complaint, ComplaintDraft};
pub use department::{Department, UnknownDepartment};
pub use language::{Language, Translation};
pub use status::{ComplaintStatus, InvalidStatus};
pub use user::{User, DEFAULT_CITIZEN_NAME};
