//! Reusable UI components.
//!
//! - `DialogFrame` - Centered modal with rounded borders
//! - `InputField` - Labelled text input with focus and cursor
//! - `Menu` - Vertical list of large selectable entries

mod dialog_frame;
mod input_field;
mod menu;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{
    calculate_input_field_height, render_input_field, visible_tail, InputFieldConfig,
};
pub use menu::{render_menu, MenuItem};
