//! This crate contains all shared UI for the workspace.

mod navbar;
pub use navbar::Navbar;

mod layout;
pub use layout::Layout;

mod provider;
pub use provider::*;

pub mod document;
pub use document::{inject_script, BrowserDocument};

pub mod storage;
pub use storage::BrowserStore;

mod components;
pub use components::*;
