//! Basic form controls shared by the views, styled via `roster.css`.

mod alert;
mod button;
mod input;
mod label;

pub use alert::Alert;
pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use label::Label;
