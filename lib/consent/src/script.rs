//! Idempotent third-party script loading.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConsentError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLoading {
    Async,
    Defer,
    #[default]
    Blocking,
}

impl From<&str> for ScriptLoading {
    fn from(value: &str) -> Self {
        match value {
            "async" => ScriptLoading::Async,
            "defer" => ScriptLoading::Defer,
            _ => ScriptLoading::Blocking,
        }
    }
}

/// The document scripts are injected into.
pub trait ScriptHost {
    /// Whether a script element with exactly this `src` exists.
    fn has_script(&self, url: &str) -> bool;
    fn append_script(&self, url: &str, loading: ScriptLoading) -> Result<()>;
}

/// Appends a script tag for `url` unless one is already present.
///
/// Returns whether a tag was added. Fire-and-forget: there is no retry and no
/// load notification.
pub fn inject_script(host: &dyn ScriptHost, url: &str, loading: ScriptLoading) -> Result<bool> {
    if url.is_empty() {
        return Err(ConsentError::EmptyScriptUrl);
    }
    if host.has_script(url) {
        debug!(url, "script already present, skipping injection");
        return Ok(false);
    }
    host.append_script(url, loading)?;
    info!(url, ?loading, "injected script");
    Ok(true)
}

/// Records injected scripts instead of touching a document.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    scripts: RefCell<Vec<(String, ScriptLoading)>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripts(&self) -> Vec<(String, ScriptLoading)> {
        self.scripts.borrow().clone()
    }
}

impl ScriptHost for MemoryDocument {
    fn has_script(&self, url: &str) -> bool {
        self.scripts.borrow().iter().any(|(src, _)| src == url)
    }

    fn append_script(&self, url: &str, loading: ScriptLoading) -> Result<()> {
        self.scripts.borrow_mut().push((url.to_string(), loading));
        Ok(())
    }
}
