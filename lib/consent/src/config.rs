//! Consent widget configuration.
//!
//! [`ConsentSettings`] is the serializable part (categories, texts, layout),
//! [`ConsentConfig`] pairs it with the [`CallbackMap`]. Updates are applied
//! through [`ConsentConfig::merge`], which is also where validation happens.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::callbacks::CallbackMap;
use crate::error::{ConsentError, Result};

/// A named class of data use with an independent accept/reject decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Required categories are always accepted and cannot be toggled.
    #[serde(default)]
    pub required: bool,
    /// Only used until the visitor made a choice.
    #[serde(default)]
    pub default_value: bool,
}

impl CategoryDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            required: false,
            default_value: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn mark_required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn enabled_by_default(mut self) -> Self {
        self.default_value = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerText {
    pub description: String,
    pub accept_all_button_text: String,
    pub accept_all_button_accessible_label: String,
    pub reject_non_essential_button_text: String,
    pub reject_non_essential_button_accessible_label: String,
    pub preferences_button_text: String,
    pub preferences_button_accessible_label: String,
}

impl Default for BannerText {
    fn default() -> Self {
        Self {
            description: "We use cookies on our site to enhance your user experience, provide personalized content, and analyze our traffic.".to_string(),
            accept_all_button_text: "Accept all".to_string(),
            accept_all_button_accessible_label: "Accept all cookies".to_string(),
            reject_non_essential_button_text: "Reject non-essential".to_string(),
            reject_non_essential_button_accessible_label: "Reject all non-essential cookies".to_string(),
            preferences_button_text: "Preferences".to_string(),
            preferences_button_accessible_label: "Toggle preferences".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesText {
    pub title: String,
    pub description: String,
    pub close_button_accessible_label: String,
}

impl Default for PreferencesText {
    fn default() -> Self {
        Self {
            title: "Customize your cookie preferences".to_string(),
            description: "We respect your right to privacy. You can choose not to allow some types of cookies. Your cookie preferences will apply across our website.".to_string(),
            close_button_accessible_label: "Close preferences".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CookieIconText {
    pub accessible_label: String,
}

impl Default for CookieIconText {
    fn default() -> Self {
        Self {
            accessible_label: "Cookie preferences".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Text {
    pub banner: BannerText,
    pub preferences: PreferencesText,
    pub cookie_icon: CookieIconText,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BannerPosition {
    Center,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconPosition {
    #[default]
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    pub banner: BannerPosition,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CookieIcon {
    pub position: IconPosition,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Background {
    /// Dim the page behind the banner and the preferences panel.
    pub show_background: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    #[default]
    Default,
    /// Nothing is focused automatically when the banner appears.
    Wizard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsentSettings {
    pub cookie_types: Vec<CategoryDescriptor>,
    pub text: Text,
    pub position: Position,
    pub cookie_icon: CookieIcon,
    pub background: Background,
    /// `false` suppresses the banner even when no choice was stored yet.
    pub show_banner: bool,
    /// Appended to every storage key.
    pub banner_suffix: Option<String>,
    pub mode: DisplayMode,
}

impl Default for ConsentSettings {
    fn default() -> Self {
        Self {
            cookie_types: Vec::new(),
            text: Text::default(),
            position: Position::default(),
            cookie_icon: CookieIcon::default(),
            background: Background::default(),
            show_banner: true,
            banner_suffix: None,
            mode: DisplayMode::default(),
        }
    }
}

impl ConsentSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn suffix(&self) -> &str {
        self.banner_suffix.as_deref().unwrap_or_default()
    }

    pub fn category(&self, id: &str) -> Option<&CategoryDescriptor> {
        self.cookie_types.iter().find(|c| c.id == id)
    }
}

/// Settings plus callbacks. Replaced wholesale on every update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsentConfig {
    pub settings: ConsentSettings,
    pub callbacks: CallbackMap,
}

impl ConsentConfig {
    pub fn new(settings: ConsentSettings) -> Self {
        Self {
            settings,
            callbacks: CallbackMap::default(),
        }
    }

    pub fn with_callbacks(mut self, callbacks: CallbackMap) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for category in &self.settings.cookie_types {
            if category.id.is_empty() {
                return Err(ConsentError::EmptyCategoryId);
            }
            if !seen.insert(category.id.as_str()) {
                return Err(ConsentError::DuplicateCategory(category.id.clone()));
            }
        }
        if let Some(unknown) = self.callbacks.category_ids().find(|id| !seen.contains(id)) {
            return Err(ConsentError::UnknownCategory(unknown.to_string()));
        }
        Ok(())
    }

    /// Shallow-merges `update` into a copy of this configuration.
    ///
    /// Replacing `cookie_types` drops the callbacks of categories that no
    /// longer exist. Callbacks carried by the update must name existing
    /// categories.
    pub fn merge(&self, update: ConfigUpdate) -> Result<Self> {
        let ConfigUpdate {
            cookie_types,
            text,
            position,
            cookie_icon,
            background,
            show_banner,
            banner_suffix,
            mode,
            callbacks,
        } = update;

        let mut settings = self.settings.clone();
        if let Some(cookie_types) = cookie_types {
            settings.cookie_types = cookie_types;
        }
        if let Some(text) = text {
            settings.text = text;
        }
        if let Some(position) = position {
            settings.position = position;
        }
        if let Some(cookie_icon) = cookie_icon {
            settings.cookie_icon = cookie_icon;
        }
        if let Some(background) = background {
            settings.background = background;
        }
        if let Some(show_banner) = show_banner {
            settings.show_banner = show_banner;
        }
        if let Some(banner_suffix) = banner_suffix {
            settings.banner_suffix = Some(banner_suffix).filter(|s| !s.is_empty());
        }
        if let Some(mode) = mode {
            settings.mode = mode;
        }

        let mut merged = self.callbacks.clone();
        merged.retain_categories(|id| settings.category(id).is_some());
        merged.extend(callbacks);

        let config = Self {
            settings,
            callbacks: merged,
        };
        config.validate()?;
        Ok(config)
    }
}

/// A partial configuration. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigUpdate {
    pub cookie_types: Option<Vec<CategoryDescriptor>>,
    pub text: Option<Text>,
    pub position: Option<Position>,
    pub cookie_icon: Option<CookieIcon>,
    pub background: Option<Background>,
    pub show_banner: Option<bool>,
    /// An empty suffix clears the namespace.
    pub banner_suffix: Option<String>,
    pub mode: Option<DisplayMode>,
    #[serde(skip)]
    pub callbacks: CallbackMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ConsentConfig {
        ConsentConfig::new(ConsentSettings {
            cookie_types: vec![
                CategoryDescriptor::new("essential", "Essential").mark_required(),
                CategoryDescriptor::new("analytics", "Analytics"),
            ],
            ..Default::default()
        })
        .with_callbacks(CallbackMap::new().on_accept("analytics", || {}))
    }

    #[test]
    fn settings_parse_from_camel_case_json() {
        let settings = ConsentSettings::from_json(
            r#"{
                "cookieTypes": [
                    { "id": "essential", "name": "Essential", "required": true },
                    { "id": "analytics", "name": "Analytics", "defaultValue": true }
                ],
                "position": { "banner": "bottomRight" },
                "cookieIcon": { "position": "bottomRight" },
                "background": { "showBackground": true },
                "showBanner": false,
                "bannerSuffix": "_news",
                "mode": "wizard",
                "text": { "banner": { "acceptAllButtonText": "Sure" } }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.cookie_types.len(), 2);
        assert!(settings.cookie_types[0].required);
        assert!(settings.cookie_types[1].default_value);
        assert_eq!(settings.position.banner, BannerPosition::BottomRight);
        assert_eq!(settings.cookie_icon.position, IconPosition::BottomRight);
        assert!(settings.background.show_background);
        assert!(!settings.show_banner);
        assert_eq!(settings.suffix(), "_news");
        assert_eq!(settings.mode, DisplayMode::Wizard);
        assert_eq!(settings.text.banner.accept_all_button_text, "Sure");
        assert_eq!(settings.text.banner.preferences_button_text, "Preferences");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = ConsentSettings::from_json("{}").unwrap();
        assert!(settings.show_banner);
        assert_eq!(settings.suffix(), "");
        assert_eq!(settings.mode, DisplayMode::Default);
        assert!(settings.cookie_types.is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ConsentSettings::from_json(r#"{ "cookieTypes": 3 }"#).unwrap_err();
        assert!(matches!(err, ConsentError::Settings(_)));
    }

    #[test]
    fn merge_replaces_only_given_fields() {
        let merged = base()
            .merge(ConfigUpdate {
                show_banner: Some(false),
                banner_suffix: Some("_b".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(!merged.settings.show_banner);
        assert_eq!(merged.settings.suffix(), "_b");
        assert_eq!(merged.settings.cookie_types.len(), 2);
        assert!(merged.callbacks.category("analytics").is_some());
    }

    #[test]
    fn merge_with_empty_suffix_clears_namespace() {
        let namespaced = base()
            .merge(ConfigUpdate {
                banner_suffix: Some("_b".to_string()),
                ..Default::default()
            })
            .unwrap();
        let cleared = namespaced
            .merge(ConfigUpdate {
                banner_suffix: Some(String::new()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(cleared.settings.banner_suffix, None);
    }

    #[test]
    fn replacing_categories_drops_orphaned_callbacks() {
        let merged = base()
            .merge(ConfigUpdate {
                cookie_types: Some(vec![CategoryDescriptor::new("marketing", "Marketing")]),
                ..Default::default()
            })
            .unwrap();
        assert!(merged.callbacks.category("analytics").is_none());
    }

    #[test]
    fn merge_rejects_callbacks_for_unknown_categories() {
        let err = base()
            .merge(ConfigUpdate {
                callbacks: CallbackMap::new().on_reject("marketing", || {}),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ConsentError::UnknownCategory(id) if id == "marketing"));
    }

    #[test]
    fn merge_rejects_duplicate_and_empty_ids() {
        let duplicate = base().merge(ConfigUpdate {
            cookie_types: Some(vec![
                CategoryDescriptor::new("analytics", "A"),
                CategoryDescriptor::new("analytics", "B"),
            ]),
            ..Default::default()
        });
        assert!(matches!(duplicate, Err(ConsentError::DuplicateCategory(_))));

        let empty = base().merge(ConfigUpdate {
            cookie_types: Some(vec![CategoryDescriptor::new("", "Nameless")]),
            ..Default::default()
        });
        assert!(matches!(empty, Err(ConsentError::EmptyCategoryId)));
    }

    #[test]
    fn update_parses_from_partial_json() {
        let update: ConfigUpdate =
            serde_json::from_str(r#"{ "background": { "showBackground": true } }"#).unwrap();
        let merged = base().merge(update).unwrap();
        assert!(merged.settings.background.show_background);
        assert!(merged.settings.show_banner);
    }
}
