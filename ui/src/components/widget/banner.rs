use consent::{BannerPosition, ConsentSettings};
use dioxus::prelude::*;

use super::focus_trap::use_focus_trap;
use crate::{use_consent, Button, ButtonVariant};

const ACCEPT: usize = 0;
const REJECT: usize = 1;
const PREFERENCES: usize = 2;

fn position_class(position: BannerPosition) -> &'static str {
    match position {
        BannerPosition::Center => "consent-banner--center",
        BannerPosition::BottomLeft => "consent-banner--bottom-left",
        BannerPosition::BottomCenter => "consent-banner--bottom-center",
        BannerPosition::BottomRight => "consent-banner--bottom-right",
    }
}

/// The first-visit prompt with the coarse accept / reject choice.
#[component]
pub fn Banner(settings: ConsentSettings, autofocus: bool) -> Element {
    let mut consent = use_consent();
    let trap = use_focus_trap(3);
    let text = settings.text.banner;
    let position = position_class(settings.position.banner);

    rsx! {
      div {
        id: "consent-banner",
        "data-consent": "banner",
        class: "consent-banner {position}",
        role: "dialog",
        "aria-live": "polite",
        "aria-label": "Cookie consent",
        onkeydown: move |evt| {
            trap.handle_keydown(&evt);
        },

        p { class: "consent-banner__description", "{text.description}" }

        div { class: "consent-banner__actions",
          Button {
            onclick: move |_| consent.accept_all(),
            label: text.accept_all_button_accessible_label.clone(),
            onmounted: move |evt: MountedEvent| {
                trap.mounted(ACCEPT, evt);
                if autofocus {
                    trap.focus(ACCEPT);
                }
            },
            onfocus: move |_: FocusEvent| trap.focused(ACCEPT),
            "{text.accept_all_button_text}"
          }
          Button {
            onclick: move |_| consent.reject_all(),
            label: text.reject_non_essential_button_accessible_label.clone(),
            onmounted: move |evt: MountedEvent| trap.mounted(REJECT, evt),
            onfocus: move |_: FocusEvent| trap.focused(REJECT),
            "{text.reject_non_essential_button_text}"
          }
          Button {
            variant: ButtonVariant::Link,
            onclick: move |_| consent.open_preferences(),
            label: text.preferences_button_accessible_label.clone(),
            onmounted: move |evt: MountedEvent| trap.mounted(PREFERENCES, evt),
            onfocus: move |_: FocusEvent| trap.focused(PREFERENCES),
            "{text.preferences_button_text}"
          }
        }
      }
    }
}
