use consent::{ConsentError, ConsentStore, Result};

/// Helper to abstract WebSys LocalStorage interactions
pub struct BrowserStore;

impl BrowserStore {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ConsentError::StorageUnavailable)
    }
}

impl ConsentStore for BrowserStore {
    fn get(&self, _key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        if let Ok(storage) = Self::storage() {
            return storage.get_item(_key).ok().flatten();
        }
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        #[cfg(target_arch = "wasm32")]
        return Self::storage()?
            .set_item(_key, _value)
            .map_err(|e| ConsentError::Storage(format!("{e:?}")));

        #[cfg(not(target_arch = "wasm32"))]
        Err(ConsentError::StorageUnavailable)
    }
}
