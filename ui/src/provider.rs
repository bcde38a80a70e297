use std::rc::Rc;

use consent::{
    ConfigUpdate, ConsentBootstrap, ConsentConfig, ConsentError, ConsentManager, ConsentSettings,
    ConsentStore, ConsentView, Effects, ScriptLoading,
};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::ConsentRoot;

/// Handle on the page's single consent bootstrap.
///
/// Callbacks are fired only after the signal borrow is released, so they may
/// call back into the handle.
#[derive(Clone, Copy)]
pub struct Consent {
    state: Signal<ConsentBootstrap>,
}

impl Consent {
    pub fn new(state: Signal<ConsentBootstrap>) -> Self {
        Self { state }
    }

    /// Mounts the widget once; later calls are no-ops.
    pub fn initialize(&mut self) {
        if self.state.peek().is_initialized() {
            return;
        }
        let effects = self.state.write().initialize();
        effects.fire();
    }

    /// Shallow-merges `update` into the configuration and rebuilds the widget.
    pub fn update_configuration(&mut self, update: ConfigUpdate) -> Result<(), ConsentError> {
        let effects = self.state.write().update_configuration(update)?;
        effects.fire();
        Ok(())
    }

    pub fn inject_script(&self, url: &str, loading: ScriptLoading) -> Result<bool, ConsentError> {
        self.state
            .peek()
            .inject_script(&crate::BrowserDocument, url, loading)
    }

    pub fn view(&self) -> ConsentView {
        self.state
            .read()
            .manager()
            .map(ConsentManager::view)
            .unwrap_or_default()
    }

    pub fn settings(&self) -> ConsentSettings {
        self.state.read().config().settings.clone()
    }

    pub fn accept_all(&mut self) {
        self.apply(ConsentManager::accept_all);
    }

    pub fn reject_all(&mut self) {
        self.apply(ConsentManager::reject_all);
    }

    pub fn toggle(&mut self, category_id: &str, checked: bool) {
        self.apply(|manager| manager.toggle(category_id, checked));
    }

    pub fn open_preferences(&mut self) {
        self.apply(ConsentManager::open_preferences);
    }

    pub fn close_preferences(&mut self) {
        self.apply(ConsentManager::close_preferences);
    }

    fn apply(&mut self, op: impl FnOnce(&mut ConsentManager) -> Effects) {
        let effects = match self.state.write().manager_mut() {
            Some(manager) => op(manager),
            None => {
                warn!("consent widget used before initialization");
                Effects::none()
            }
        };
        effects.fire();
    }
}

pub fn use_consent() -> Consent {
    use_context::<Consent>()
}

fn default_store() -> Rc<dyn ConsentStore> {
    #[cfg(target_arch = "wasm32")]
    return Rc::new(crate::BrowserStore);

    #[cfg(not(target_arch = "wasm32"))]
    Rc::new(consent::MemoryStore::new())
}

/// Provides the consent handle to `children` and renders the widget host
/// as the first node of the tree.
#[component]
pub fn ConsentProvider(config: ConsentConfig, children: Element) -> Element {
    let state = use_signal(move || ConsentBootstrap::new(config, default_store()));
    let mut consent = use_context_provider(|| Consent::new(state));

    // Runs after the first render, once the document body exists.
    use_effect(move || consent.initialize());

    rsx! {
        ConsentRoot {}
        {children}
    }
}
