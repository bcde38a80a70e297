//! Page-wide lifecycle of the consent widget.
//!
//! A [`ConsentBootstrap`] holds the current configuration and at most one
//! [`ConsentManager`]. Reconfiguring always tears the current manager down
//! before the next one is mounted from the merged configuration; the
//! persisted store is shared across instances.

use std::rc::Rc;

use tracing::{debug, info};

use crate::callbacks::Effects;
use crate::config::{ConfigUpdate, ConsentConfig};
use crate::error::Result;
use crate::manager::ConsentManager;
use crate::script::{self, ScriptHost, ScriptLoading};
use crate::storage::ConsentStore;

pub struct ConsentBootstrap {
    config: ConsentConfig,
    store: Rc<dyn ConsentStore>,
    manager: Option<ConsentManager>,
}

impl ConsentBootstrap {
    pub fn new(config: ConsentConfig, store: Rc<dyn ConsentStore>) -> Self {
        Self {
            config,
            store,
            manager: None,
        }
    }

    pub fn config(&self) -> &ConsentConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.manager.is_some()
    }

    pub fn manager(&self) -> Option<&ConsentManager> {
        self.manager.as_ref()
    }

    pub fn manager_mut(&mut self) -> Option<&mut ConsentManager> {
        self.manager.as_mut()
    }

    /// Mounts the manager. Does nothing when one already exists.
    pub fn initialize(&mut self) -> Effects {
        if self.manager.is_some() {
            debug!("consent manager already initialized");
            return Effects::none();
        }
        let (manager, effects) = ConsentManager::mount(self.config.clone(), self.store.clone());
        info!(
            categories = self.config.settings.cookie_types.len(),
            suffix = self.config.settings.suffix(),
            "consent manager initialized"
        );
        self.manager = Some(manager);
        effects
    }

    /// Merges `update` into the current configuration and remounts.
    ///
    /// An invalid update leaves the current manager untouched.
    pub fn update_configuration(&mut self, update: ConfigUpdate) -> Result<Effects> {
        let merged = self.config.merge(update)?;
        self.teardown();
        self.config = merged;
        Ok(self.initialize())
    }

    pub fn teardown(&mut self) {
        if let Some(mut manager) = self.manager.take() {
            manager.teardown();
        }
    }

    pub fn inject_script(
        &self,
        host: &dyn ScriptHost,
        url: &str,
        loading: ScriptLoading,
    ) -> Result<bool> {
        script::inject_script(host, url, loading)
    }
}
