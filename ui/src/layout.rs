use crate::components::Footer;
use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element, footer_links: Element) -> Element {
    rsx! {
      div { class: "site",
        {children}
        Footer { {footer_links} }
      }
    }
}
