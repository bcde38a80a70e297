//! The consent manager state machine.
//!
//! A [`ConsentManager`] owns one configuration and a handle to the persisted
//! consent store. It tracks which surfaces (banner, preferences panel,
//! backdrop) are visible and projects everything the UI needs into a
//! [`ConsentView`]. Transitions return [`Effects`] instead of running
//! callbacks, see [`crate::callbacks`].
//!
//! ```text
//! Uninitialized -> BannerVisible | IconOnly  <->  PreferencesOpen
//! accept all / reject all / close -> IconOnly
//! ```

use std::rc::Rc;

use tracing::{debug, warn};

use crate::callbacks::{Effects, Lifecycle};
use crate::config::{CategoryDescriptor, ConsentConfig, ConsentSettings, DisplayMode};
use crate::storage::{ConsentRecord, ConsentStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentState {
    /// Torn down, nothing rendered.
    Detached,
    BannerVisible,
    IconOnly,
    PreferencesOpen,
}

/// Control that receives focus when its surface appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    BannerAccept,
    PreferencesClose,
}

/// Checkbox state of one category in the preferences panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryState {
    pub id: String,
    pub name: String,
    pub description: String,
    pub checked: bool,
    /// Required categories render a checked, non-interactive control.
    pub required: bool,
}

/// Everything the UI renders, derived from configuration and stored state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsentView {
    pub mounted: bool,
    pub banner: bool,
    pub preferences: bool,
    pub backdrop: bool,
    pub icon: bool,
    pub scroll_locked: bool,
    pub focus: Option<FocusTarget>,
    pub categories: Vec<CategoryState>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Surfaces {
    banner: bool,
    preferences: bool,
    backdrop: bool,
}

pub struct ConsentManager {
    config: ConsentConfig,
    store: Rc<dyn ConsentStore>,
    surfaces: Surfaces,
    focus: Option<FocusTarget>,
    mounted: bool,
}

impl ConsentManager {
    /// Builds the widget and decides its initial visibility.
    ///
    /// Required categories are persisted as accepted and their `onAccept`
    /// fires on every mount. Returning visitors additionally get every other
    /// stored decision replayed so side effects are re-established without
    /// prompting again.
    pub fn mount(config: ConsentConfig, store: Rc<dyn ConsentStore>) -> (Self, Effects) {
        let mut manager = Self {
            config,
            store,
            surfaces: Surfaces::default(),
            focus: None,
            mounted: true,
        };
        let mut effects = Effects::none();

        let returning = manager.record().has_initial_choice();
        if manager.settings().show_banner && !returning {
            let backdrop = manager.backdrop_enabled();
            manager.show(
                Surfaces {
                    banner: true,
                    preferences: false,
                    backdrop,
                },
                &mut effects,
            );
            manager.focus = match manager.settings().mode {
                DisplayMode::Wizard => None,
                DisplayMode::Default => Some(FocusTarget::BannerAccept),
            };
        }

        manager.replay_required(&mut effects);
        if returning {
            manager.replay_optional(&mut effects);
        }

        debug!(state = ?manager.state(), returning, "consent manager mounted");
        (manager, effects)
    }

    pub fn config(&self) -> &ConsentConfig {
        &self.config
    }

    pub fn settings(&self) -> &ConsentSettings {
        &self.config.settings
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> ConsentState {
        if !self.mounted {
            ConsentState::Detached
        } else if self.surfaces.preferences {
            ConsentState::PreferencesOpen
        } else if self.surfaces.banner {
            ConsentState::BannerVisible
        } else {
            ConsentState::IconOnly
        }
    }

    pub fn accept_all(&mut self) -> Effects {
        self.handle_choice(true)
    }

    pub fn reject_all(&mut self) -> Effects {
        self.handle_choice(false)
    }

    /// Applies a banner or panel wide decision to every category.
    pub fn handle_choice(&mut self, accepted: bool) -> Effects {
        let mut effects = Effects::none();
        if !self.mounted {
            return effects;
        }

        self.mark_initial_choice();
        self.show(Surfaces::default(), &mut effects);
        self.focus = None;

        for category in &self.config.settings.cookie_types {
            let value = category.required || accepted;
            self.persist(&category.id, value);
            effects.category(&self.config.callbacks, &category.id, value);
        }

        let event = if accepted {
            Lifecycle::AcceptAll
        } else {
            Lifecycle::RejectAll
        };
        effects.lifecycle(&self.config.callbacks, event);

        debug!(accepted, "consent choice applied to all categories");
        effects
    }

    /// Checkbox change inside the preferences panel. Nothing happens unless
    /// the value differs from what the checkbox showed before.
    pub fn toggle(&mut self, category_id: &str, checked: bool) -> Effects {
        let mut effects = Effects::none();
        if !self.mounted {
            return effects;
        }
        let Some(category) = self.settings().category(category_id) else {
            debug!(category_id, "toggle for unknown consent category ignored");
            return effects;
        };
        if category.required {
            return effects;
        }
        if self.effective_choice(category) == checked {
            return effects;
        }

        self.persist(category_id, checked);
        effects.category(&self.config.callbacks, category_id, checked);
        debug!(category_id, checked, "consent category toggled");
        effects
    }

    pub fn open_preferences(&mut self) -> Effects {
        let mut effects = Effects::none();
        if !self.mounted || self.surfaces.preferences {
            return effects;
        }
        let backdrop = self.backdrop_enabled();
        self.show(
            Surfaces {
                banner: false,
                preferences: true,
                backdrop,
            },
            &mut effects,
        );
        self.focus = Some(FocusTarget::PreferencesClose);
        effects
    }

    /// Closes the panel without an explicit accept or reject.
    ///
    /// On a first visit every category is reset to its default (required or
    /// `defaultValue` accepted, the rest rejected) and the sentinel is set. Returning visitors only get
    /// their stored decisions replayed.
    pub fn close_preferences(&mut self) -> Effects {
        let mut effects = Effects::none();
        if !self.mounted || !self.surfaces.preferences {
            return effects;
        }
        self.show(Surfaces::default(), &mut effects);
        self.focus = None;

        if self.record().has_initial_choice() {
            self.replay_required(&mut effects);
            self.replay_optional(&mut effects);
        } else {
            self.apply_defaults(&mut effects);
            self.mark_initial_choice();
        }
        effects
    }

    /// Detaches the widget. Safe to call repeatedly; later operations are no-ops.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.surfaces = Surfaces::default();
        self.focus = None;
        debug!("consent manager torn down");
    }

    pub fn view(&self) -> ConsentView {
        if !self.mounted {
            return ConsentView::default();
        }
        let Surfaces {
            banner,
            preferences,
            backdrop,
        } = self.surfaces;
        ConsentView {
            mounted: true,
            banner,
            preferences,
            backdrop,
            icon: !banner && !preferences,
            scroll_locked: preferences,
            focus: self.focus,
            categories: self.category_states(),
        }
    }

    /// Current checkbox values: required categories are forced on, the rest
    /// use the stored choice and fall back to their default.
    pub fn category_states(&self) -> Vec<CategoryState> {
        self.settings()
            .cookie_types
            .iter()
            .map(|category| CategoryState {
                id: category.id.clone(),
                name: category.name.clone(),
                description: category.description.clone(),
                checked: category.required || self.effective_choice(category),
                required: category.required,
            })
            .collect()
    }

    fn record(&self) -> ConsentRecord<'_> {
        ConsentRecord::new(self.store.as_ref(), self.config.settings.suffix())
    }

    fn backdrop_enabled(&self) -> bool {
        self.settings().background.show_background
    }

    fn effective_choice(&self, category: &CategoryDescriptor) -> bool {
        self.record()
            .choice(&category.id)
            .unwrap_or(category.default_value)
    }

    fn persist(&self, category_id: &str, accepted: bool) {
        if let Err(e) = self.record().set_choice(category_id, accepted) {
            warn!(category_id, "failed to persist consent choice: {e}");
        }
    }

    fn mark_initial_choice(&self) {
        if let Err(e) = self.record().mark_initial_choice() {
            warn!("failed to persist initial consent marker: {e}");
        }
    }

    /// Moves to `next`, queueing open and close hooks for surfaces whose
    /// visibility changed.
    fn show(&mut self, next: Surfaces, effects: &mut Effects) {
        let previous = self.surfaces;
        self.surfaces = next;

        let callbacks = &self.config.callbacks;
        let transitions = [
            (previous.banner, next.banner, Lifecycle::BannerOpen, Lifecycle::BannerClose),
            (
                previous.preferences,
                next.preferences,
                Lifecycle::PreferencesOpen,
                Lifecycle::PreferencesClose,
            ),
            (previous.backdrop, next.backdrop, Lifecycle::BackdropOpen, Lifecycle::BackdropClose),
        ];
        for (was, is, _, close) in transitions {
            if was && !is {
                effects.lifecycle(callbacks, close);
            }
        }
        for (was, is, open, _) in transitions {
            if !was && is {
                effects.lifecycle(callbacks, open);
            }
        }
    }

    fn replay_required(&self, effects: &mut Effects) {
        for category in self.settings().cookie_types.iter().filter(|c| c.required) {
            if let Err(e) = self.record().ensure_choice(&category.id, true) {
                warn!(category_id = %category.id, "failed to persist required category: {e}");
            }
            effects.category(&self.config.callbacks, &category.id, true);
        }
    }

    fn replay_optional(&self, effects: &mut Effects) {
        for category in self.settings().cookie_types.iter().filter(|c| !c.required) {
            let accepted = self.record().choice(&category.id).unwrap_or(false);
            effects.category(&self.config.callbacks, &category.id, accepted);
        }
    }

    fn apply_defaults(&self, effects: &mut Effects) {
        for category in &self.config.settings.cookie_types {
            let accepted = category.required || category.default_value;
            self.persist(&category.id, accepted);
            effects.category(&self.config.callbacks, &category.id, accepted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::CallbackMap;
    use crate::config::{Background, CategoryDescriptor};
    use crate::storage::MemoryStore;
    use std::cell::RefCell;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    fn logger(log: &Log, entry: &'static str) -> impl Fn() + 'static {
        let log = log.clone();
        move || log.borrow_mut().push(entry)
    }

    fn config(log: &Log, settings: ConsentSettings) -> ConsentConfig {
        let callbacks = CallbackMap::new()
            .on_accept("essential", logger(log, "essential+"))
            .on_reject("essential", logger(log, "essential-"))
            .on_accept("analytics", logger(log, "analytics+"))
            .on_reject("analytics", logger(log, "analytics-"))
            .on_accept("ads", logger(log, "ads+"))
            .on_reject("ads", logger(log, "ads-"))
            .on(Lifecycle::AcceptAll, logger(log, "all+"))
            .on(Lifecycle::RejectAll, logger(log, "all-"))
            .on(Lifecycle::BannerOpen, logger(log, "banner open"))
            .on(Lifecycle::BannerClose, logger(log, "banner close"))
            .on(Lifecycle::PreferencesOpen, logger(log, "prefs open"))
            .on(Lifecycle::PreferencesClose, logger(log, "prefs close"))
            .on(Lifecycle::BackdropOpen, logger(log, "backdrop open"))
            .on(Lifecycle::BackdropClose, logger(log, "backdrop close"));
        ConsentConfig::new(settings).with_callbacks(callbacks)
    }

    fn settings() -> ConsentSettings {
        ConsentSettings {
            cookie_types: vec![
                CategoryDescriptor::new("essential", "Essential").mark_required(),
                CategoryDescriptor::new("analytics", "Analytics"),
                CategoryDescriptor::new("ads", "Advertising").enabled_by_default(),
            ],
            ..Default::default()
        }
    }

    fn mount(log: &Log, store: &Rc<MemoryStore>, settings: ConsentSettings) -> ConsentManager {
        let (manager, effects) = ConsentManager::mount(config(log, settings), store.clone());
        effects.fire();
        manager
    }

    fn drain(log: &Log) -> Vec<&'static str> {
        log.borrow_mut().drain(..).collect()
    }

    #[test]
    fn first_visit_shows_banner_and_accepts_required() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let manager = mount(&log, &store, settings());

        assert_eq!(manager.state(), ConsentState::BannerVisible);
        let view = manager.view();
        assert!(view.banner && !view.icon && !view.preferences && !view.backdrop);
        assert_eq!(view.focus, Some(FocusTarget::BannerAccept));
        assert_eq!(drain(&log), vec!["banner open", "essential+"]);
        assert_eq!(store.get("consentChoice_essential").as_deref(), Some("true"));
        assert_eq!(store.get("consentChoice_analytics"), None);
    }

    #[test]
    fn wizard_mode_does_not_autofocus() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let manager = mount(
            &log,
            &store,
            ConsentSettings {
                mode: DisplayMode::Wizard,
                ..settings()
            },
        );
        assert!(manager.view().banner);
        assert_eq!(manager.view().focus, None);
    }

    #[test]
    fn show_banner_false_leaves_only_the_icon() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let manager = mount(
            &log,
            &store,
            ConsentSettings {
                show_banner: false,
                ..settings()
            },
        );
        assert_eq!(manager.state(), ConsentState::IconOnly);
        assert!(manager.view().icon);
        assert!(!manager.view().banner);
    }

    #[test]
    fn backdrop_accompanies_banner_when_configured() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let mut manager = mount(
            &log,
            &store,
            ConsentSettings {
                background: Background {
                    show_background: true,
                },
                ..settings()
            },
        );
        assert!(manager.view().backdrop);
        drain(&log);

        manager.open_preferences().fire();
        assert_eq!(drain(&log), vec!["banner close", "prefs open"]);
        assert!(manager.view().backdrop);

        manager.accept_all().fire();
        assert!(!manager.view().backdrop);
        assert_eq!(
            drain(&log),
            vec!["prefs close", "backdrop close", "essential+", "analytics+", "ads+", "all+"]
        );
    }

    #[test]
    fn accept_and_reject_all_persist_every_category() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let mut manager = mount(&log, &store, settings());
        drain(&log);

        manager.reject_all().fire();
        assert_eq!(
            drain(&log),
            vec!["banner close", "essential+", "analytics-", "ads-", "all-"]
        );
        assert_eq!(store.get("consentChoice_essential").as_deref(), Some("true"));
        assert_eq!(store.get("consentChoice_analytics").as_deref(), Some("false"));
        assert_eq!(store.get("consentChoice_ads").as_deref(), Some("false"));
        assert!(store.contains("consentInitialChoiceMade"));
        assert_eq!(manager.state(), ConsentState::IconOnly);

        manager.accept_all().fire();
        assert_eq!(drain(&log), vec!["essential+", "analytics+", "ads+", "all+"]);
        assert_eq!(store.get("consentChoice_analytics").as_deref(), Some("true"));
    }

    #[test]
    fn toggle_only_acts_on_changes() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let mut manager = mount(&log, &store, settings());
        manager.open_preferences().fire();
        drain(&log);
        let writes = store.writes();

        // analytics shows unchecked, ads shows checked by default
        assert!(manager.toggle("analytics", false).is_empty());
        assert!(manager.toggle("ads", true).is_empty());
        assert_eq!(store.writes(), writes);

        manager.toggle("analytics", true).fire();
        manager.toggle("ads", false).fire();
        assert_eq!(drain(&log), vec!["analytics+", "ads-"]);
        assert_eq!(store.writes(), writes + 2);

        assert!(manager.toggle("analytics", true).is_empty());
        assert!(manager.toggle("essential", false).is_empty());
        assert!(manager.toggle("unknown", true).is_empty());
        assert_eq!(store.get("consentChoice_essential").as_deref(), Some("true"));
    }

    #[test]
    fn panel_shows_stored_values_and_defaults() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::with_entries([("consentChoice_analytics", "true")]));
        let manager = mount(&log, &store, settings());

        let checked: Vec<(String, bool, bool)> = manager
            .category_states()
            .into_iter()
            .map(|c| (c.id, c.checked, c.required))
            .collect();
        assert_eq!(
            checked,
            vec![
                ("essential".to_string(), true, true),
                ("analytics".to_string(), true, false),
                ("ads".to_string(), true, false),
            ]
        );
    }

    #[test]
    fn opening_preferences_locks_scroll_and_focuses_close() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let mut manager = mount(&log, &store, settings());

        manager.open_preferences().fire();
        let view = manager.view();
        assert_eq!(manager.state(), ConsentState::PreferencesOpen);
        assert!(view.preferences && view.scroll_locked && !view.banner && !view.icon);
        assert_eq!(view.focus, Some(FocusTarget::PreferencesClose));

        assert!(manager.open_preferences().is_empty());
    }

    #[test]
    fn first_close_resets_every_category_to_its_default() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let mut manager = mount(
            &log,
            &store,
            ConsentSettings {
                cookie_types: vec![
                    CategoryDescriptor::new("essential", "Essential").mark_required(),
                    CategoryDescriptor::new("analytics", "Analytics"),
                    CategoryDescriptor::new("ads", "Advertising").enabled_by_default(),
                    CategoryDescriptor::new("video", "Video"),
                ],
                ..Default::default()
            },
        );
        manager.open_preferences().fire();
        drain(&log);
        manager.toggle("analytics", true).fire();
        manager.toggle("ads", false).fire();
        manager.toggle("video", true).fire();
        assert_eq!(drain(&log), vec!["analytics+", "ads-"]);

        manager.close_preferences().fire();

        assert_eq!(
            drain(&log),
            vec!["prefs close", "essential+", "analytics-", "ads+"]
        );
        assert_eq!(store.get("consentChoice_analytics").as_deref(), Some("false"));
        assert_eq!(store.get("consentChoice_ads").as_deref(), Some("true"));
        assert_eq!(store.get("consentChoice_video").as_deref(), Some("false"));
        assert!(store.contains("consentInitialChoiceMade"));
        assert_eq!(manager.state(), ConsentState::IconOnly);
        assert!(!manager.view().scroll_locked);
    }

    #[test]
    fn returning_close_replays_without_writing() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let mut manager = mount(&log, &store, settings());
        manager.reject_all().fire();
        manager.open_preferences().fire();
        drain(&log);
        let writes = store.writes();

        manager.close_preferences().fire();

        assert_eq!(
            drain(&log),
            vec!["prefs close", "essential+", "analytics-", "ads-"]
        );
        assert_eq!(store.writes(), writes);
    }

    #[test]
    fn close_is_ignored_when_panel_is_closed() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let mut manager = mount(&log, &store, settings());
        drain(&log);

        assert!(manager.close_preferences().is_empty());
        assert!(!store.contains("consentInitialChoiceMade"));
    }

    #[test]
    fn returning_visitor_gets_decisions_replayed_on_mount() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::with_entries([
            ("consentInitialChoiceMade", "true"),
            ("consentChoice_essential", "true"),
            ("consentChoice_analytics", "true"),
        ]));

        let manager = mount(&log, &store, settings());

        assert_eq!(manager.state(), ConsentState::IconOnly);
        assert_eq!(drain(&log), vec!["essential+", "analytics+", "ads-"]);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn namespaced_banners_are_independent() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let mut plain = mount(&log, &store, settings());
        plain.accept_all().fire();

        let namespaced = mount(
            &log,
            &store,
            ConsentSettings {
                banner_suffix: Some("_weather".to_string()),
                ..settings()
            },
        );
        assert_eq!(namespaced.state(), ConsentState::BannerVisible);
        assert!(store.contains("consentChoice_essential_weather"));
        assert_eq!(store.get("consentChoice_analytics_weather"), None);
    }

    #[test]
    fn teardown_is_idempotent_and_silences_operations() {
        let log = Log::default();
        let store = Rc::new(MemoryStore::new());
        let mut manager = mount(&log, &store, settings());
        manager.open_preferences().fire();
        drain(&log);

        manager.teardown();
        manager.teardown();

        assert_eq!(manager.state(), ConsentState::Detached);
        assert_eq!(manager.view(), ConsentView::default());
        assert!(manager.accept_all().is_empty());
        assert!(manager.toggle("analytics", true).is_empty());
        assert!(manager.open_preferences().is_empty());
        assert!(drain(&log).is_empty());
        assert!(!store.contains("consentInitialChoiceMade"));
    }
}
