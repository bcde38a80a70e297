mod button;
mod checkbox;

pub use button::{Button, ButtonVariant};
pub use checkbox::Checkbox;
