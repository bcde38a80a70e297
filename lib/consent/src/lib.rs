pub mod bootstrap;
pub mod callbacks;
pub mod config;
pub mod error;
pub mod focus;
pub mod manager;
pub mod script;
pub mod storage;

pub use bootstrap::ConsentBootstrap;
pub use callbacks::{Callback, CallbackMap, CategoryCallbacks, Effects, Lifecycle};
pub use config::{
    Background, BannerPosition, BannerText, CategoryDescriptor, ConfigUpdate, ConsentConfig,
    ConsentSettings, CookieIcon, CookieIconText, DisplayMode, IconPosition, Position,
    PreferencesText, Text,
};
pub use error::{ConsentError, Result};
pub use focus::{FocusRing, TabDirection};
pub use manager::{CategoryState, ConsentManager, ConsentState, ConsentView, FocusTarget};
pub use script::{inject_script, MemoryDocument, ScriptHost, ScriptLoading};
pub use storage::{choice_key, sentinel_key, ConsentRecord, ConsentStore, MemoryStore};
