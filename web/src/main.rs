use dioxus::prelude::*;

use ui::{ConsentProvider, Layout, Navbar};
use views::{HomePage, PrivacyPage};

mod tracking;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(WebNavbar)]
        #[route("/")]
        HomePage {},
        #[route("/privacy")]
        PrivacyPage {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(tracking::consent_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "The Morning Ledger" }

        ConsentProvider { config, Router::<Route> {} }
    }
}

#[component]
fn WebNavbar() -> Element {
    rsx! {
        Layout {
            footer_links: rsx! {
                Link { class: "site-footer__link", to: Route::PrivacyPage {}, "Privacy policy" }
            },
            Navbar {
                Link {
                    class: "site-header__link",
                    active_class: "is-active",
                    to: Route::HomePage {},
                    "Front page"
                }
                Link {
                    class: "site-header__link",
                    active_class: "is-active",
                    to: Route::PrivacyPage {},
                    "Privacy"
                }
            }

            main { class: "site-main",
                Outlet::<Route> {}
            }
        }
    }
}
