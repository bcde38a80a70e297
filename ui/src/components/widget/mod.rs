mod backdrop;
mod banner;
mod cookie_icon;
mod focus_trap;
mod preferences;
mod root;

pub use backdrop::Backdrop;
pub use banner::Banner;
pub use cookie_icon::CookieIcon;
pub use focus_trap::{use_focus_trap, FocusTrap};
pub use preferences::PreferencesPanel;
pub use root::ConsentRoot;
