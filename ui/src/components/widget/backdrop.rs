use dioxus::prelude::*;

/// Dims the page behind the banner or the preferences panel.
#[component]
pub fn Backdrop() -> Element {
    rsx! {
      div {
        id: "consent-backdrop",
        "data-consent": "backdrop",
        class: "consent-backdrop",
      }
    }
}
