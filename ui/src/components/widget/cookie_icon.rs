use consent::IconPosition;
use dioxus::prelude::*;

use crate::use_consent;

/// Floating button that reopens the preferences panel.
#[component]
pub fn CookieIcon(visible: bool, position: IconPosition, label: String) -> Element {
    let mut consent = use_consent();
    let position = match position {
        IconPosition::BottomLeft => "consent-icon--bottom-left",
        IconPosition::BottomRight => "consent-icon--bottom-right",
    };

    rsx! {
      button {
        id: "consent-icon",
        "data-consent": "icon",
        "type": "button",
        class: "consent-icon {position}",
        "aria-label": "{label}",
        hidden: !visible,
        onclick: move |_| consent.open_preferences(),
        svg {
          width: "38",
          height: "38",
          view_box: "0 0 24 24",
          fill: "currentColor",
          path { d: "M12 2a10 10 0 1 0 10 10 4 4 0 0 1-5-5 4 4 0 0 1-5-5zm-3.5 7a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3zm3 6a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3zm5-1a1 1 0 1 1 0 2 1 1 0 0 1 0-2z" }
        }
      }
    }
}
