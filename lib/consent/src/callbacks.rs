//! User-supplied consent callbacks.
//!
//! Callbacks are never invoked while the manager is being mutated. Every
//! transition instead returns an [`Effects`] list which the caller fires once
//! it has released whatever borrow it holds on the manager.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A shared, argument-less callback. Two callbacks are equal when they point
/// to the same closure.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Configuration-level lifecycle hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    AcceptAll,
    RejectAll,
    BannerOpen,
    BannerClose,
    PreferencesOpen,
    PreferencesClose,
    BackdropOpen,
    BackdropClose,
}

impl Lifecycle {
    pub fn name(&self) -> &'static str {
        match self {
            Lifecycle::AcceptAll => "onAcceptAll",
            Lifecycle::RejectAll => "onRejectAll",
            Lifecycle::BannerOpen => "onBannerOpen",
            Lifecycle::BannerClose => "onBannerClose",
            Lifecycle::PreferencesOpen => "onPreferencesOpen",
            Lifecycle::PreferencesClose => "onPreferencesClose",
            Lifecycle::BackdropOpen => "onBackdropOpen",
            Lifecycle::BackdropClose => "onBackdropClose",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryCallbacks {
    pub on_accept: Option<Callback>,
    pub on_reject: Option<Callback>,
}

impl CategoryCallbacks {
    fn merge(&mut self, other: CategoryCallbacks) {
        if other.on_accept.is_some() {
            self.on_accept = other.on_accept;
        }
        if other.on_reject.is_some() {
            self.on_reject = other.on_reject;
        }
    }
}

/// Every optional callback of a consent configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallbackMap {
    lifecycle: HashMap<Lifecycle, Callback>,
    categories: HashMap<String, CategoryCallbacks>,
}

impl CallbackMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, event: Lifecycle, f: impl Fn() + 'static) -> Self {
        self.lifecycle.insert(event, Callback::new(f));
        self
    }

    pub fn on_accept(mut self, category: impl Into<String>, f: impl Fn() + 'static) -> Self {
        self.categories.entry(category.into()).or_default().on_accept = Some(Callback::new(f));
        self
    }

    pub fn on_reject(mut self, category: impl Into<String>, f: impl Fn() + 'static) -> Self {
        self.categories.entry(category.into()).or_default().on_reject = Some(Callback::new(f));
        self
    }

    pub fn lifecycle(&self, event: Lifecycle) -> Option<&Callback> {
        self.lifecycle.get(&event)
    }

    pub fn category(&self, id: &str) -> Option<&CategoryCallbacks> {
        self.categories.get(id)
    }

    pub(crate) fn category_ids(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub(crate) fn retain_categories(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.categories.retain(|id, _| keep(id));
    }

    /// Entries of `other` replace entries of `self` one by one.
    pub(crate) fn extend(&mut self, other: CallbackMap) {
        self.lifecycle.extend(other.lifecycle);
        for (id, callbacks) in other.categories {
            self.categories.entry(id).or_default().merge(callbacks);
        }
    }
}

#[derive(Debug, Clone)]
struct Invocation {
    label: String,
    callback: Callback,
}

/// Callbacks queued by a consent transition, in invocation order.
#[must_use = "consent callbacks only run once the effects are fired"]
#[derive(Debug, Default)]
pub struct Effects(Vec<Invocation>);

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    /// Queues `callback` when one was configured. A missing callback is a no-op.
    pub(crate) fn push_if_present(&mut self, label: impl FnOnce() -> String, callback: Option<&Callback>) {
        if let Some(callback) = callback {
            self.0.push(Invocation {
                label: label(),
                callback: callback.clone(),
            });
        }
    }

    pub(crate) fn lifecycle(&mut self, callbacks: &CallbackMap, event: Lifecycle) {
        self.push_if_present(|| event.name().to_string(), callbacks.lifecycle(event));
    }

    pub(crate) fn category(&mut self, callbacks: &CallbackMap, id: &str, accepted: bool) {
        let entry = callbacks.category(id);
        if accepted {
            self.push_if_present(
                || format!("{id}.onAccept"),
                entry.and_then(|c| c.on_accept.as_ref()),
            );
        } else {
            self.push_if_present(
                || format!("{id}.onReject"),
                entry.and_then(|c| c.on_reject.as_ref()),
            );
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels of the queued callbacks, e.g. `analytics.onAccept` or `onAcceptAll`.
    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|i| i.label.as_str()).collect()
    }

    /// Invokes every queued callback synchronously. A panicking callback is not caught.
    pub fn fire(self) {
        for invocation in self.0 {
            tracing::trace!(callback = %invocation.label, "invoking consent callback");
            invocation.callback.call();
        }
    }
}
