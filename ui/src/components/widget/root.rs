use consent::FocusTarget;
use dioxus::prelude::*;

use super::{Backdrop, Banner, CookieIcon, PreferencesPanel};
use crate::document::{lock_page_scroll, unlock_page_scroll};
use crate::use_consent;

/// Host container of every consent surface. Renders nothing until the
/// widget is initialized and after it was torn down.
#[component]
pub fn ConsentRoot() -> Element {
    let consent = use_consent();
    let mut saved_scroll = use_signal(|| None::<f64>);

    use_effect(move || {
        let locked = consent.view().scroll_locked;
        let saved = *saved_scroll.peek();
        match (locked, saved) {
            (true, None) => saved_scroll.set(Some(lock_page_scroll())),
            (false, Some(offset)) => {
                unlock_page_scroll(offset);
                saved_scroll.set(None);
            }
            _ => {}
        }
    });

    use_drop(move || {
        if let Some(offset) = *saved_scroll.peek() {
            unlock_page_scroll(offset);
        }
    });

    let view = consent.view();
    if !view.mounted {
        return rsx! {};
    }
    let settings = consent.settings();
    let icon_label = settings.text.cookie_icon.accessible_label.clone();
    let icon_position = settings.cookie_icon.position;

    rsx! {
      div { id: "consent-manager", "data-consent": "root",
        if view.backdrop {
          Backdrop {}
        }
        if view.banner {
          Banner {
            settings: settings.clone(),
            autofocus: view.focus == Some(FocusTarget::BannerAccept),
          }
        }
        PreferencesPanel {
          open: view.preferences,
          settings,
          categories: view.categories,
        }
        CookieIcon { visible: view.icon, position: icon_position, label: icon_label }
      }
    }
}
