use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::Result;

/// Synchronous string key-value storage that outlives a consent manager,
/// e.g. `window.localStorage`.
pub trait ConsentStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

pub fn choice_key(category_id: &str, suffix: &str) -> String {
    format!("consentChoice_{category_id}{suffix}")
}

pub fn sentinel_key(suffix: &str) -> String {
    format!("consentInitialChoiceMade{suffix}")
}

/// The persisted consent entries of one namespace.
pub struct ConsentRecord<'a> {
    store: &'a dyn ConsentStore,
    suffix: &'a str,
}

impl<'a> ConsentRecord<'a> {
    pub fn new(store: &'a dyn ConsentStore, suffix: &'a str) -> Self {
        Self { store, suffix }
    }

    /// `None` when nothing was stored for the category.
    pub fn choice(&self, category_id: &str) -> Option<bool> {
        self.store
            .get(&choice_key(category_id, self.suffix))
            .map(|value| value == "true")
    }

    pub fn set_choice(&self, category_id: &str, accepted: bool) -> Result<()> {
        let value = if accepted { "true" } else { "false" };
        self.store.set(&choice_key(category_id, self.suffix), value)
    }

    /// Writes the choice only if the stored value differs.
    pub fn ensure_choice(&self, category_id: &str, accepted: bool) -> Result<()> {
        let key = choice_key(category_id, self.suffix);
        let value = if accepted { "true" } else { "false" };
        if self.store.get(&key).as_deref() == Some(value) {
            return Ok(());
        }
        self.store.set(&key, value)
    }

    pub fn has_initial_choice(&self) -> bool {
        self.store.contains(&sentinel_key(self.suffix))
    }

    /// Sets the sentinel once. It is never cleared afterwards.
    pub fn mark_initial_choice(&self) -> Result<()> {
        if self.has_initial_choice() {
            return Ok(());
        }
        self.store.set(&sentinel_key(self.suffix), "true")
    }
}

/// In-memory store for tests and targets without browser storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        store
    }

    /// Number of `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ConsentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
