pub mod alert;
pub mod button;
pub mod card;
pub mod dialog;
pub mod input;
pub mod label;
pub mod spinner;
pub mod textarea;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::{Input, InputProps};
pub use label::*;
pub use spinner::*;
pub use textarea::*;
