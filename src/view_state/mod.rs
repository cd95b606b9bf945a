//! View state for the kiosk.
//!
//! The app holds all transient UI state in one [`ViewState`]; screens are
//! drawn from a borrowed [`RenderContext`].
//!
//! ```text
//! key event ──▶ App action ──▶ lifecycle / store
//!                   │
//!                   ▼
//!              ViewState ──▶ RenderContext ──▶ ui::render
//! ```

mod form_state;
mod kiosk_view;
mod render_context;

pub use form_state::{ComplaintForm, FormField};
pub use kiosk_view::{ViewState, MOBILE_INPUT_MAX};
pub use render_context::{department_volume, DepartmentVolume, RenderContext};
