use dioxus::prelude::*;

use crate::use_consent;

#[component]
pub fn Footer(children: Element) -> Element {
    let mut consent = use_consent();

    rsx! {
      footer { class: "site-footer",
        nav { class: "site-footer__links", {children} }
        button {
          class: "site-footer__link",
          "type": "button",
          onclick: move |_| consent.open_preferences(),
          "Cookie settings"
        }
        p { class: "site-footer__note", "All stories on this site are placeholder content." }
      }
    }
}
