use consent::{Background, ConfigUpdate};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use ui::{use_consent, Button, ButtonVariant};

#[component]
pub fn PrivacyPage() -> Element {
    let mut consent = use_consent();
    let view = consent.view();
    let dimmed = consent.settings().background.show_background;

    let toggle_backdrop = move |_: MouseEvent| {
        let update = ConfigUpdate {
            background: Some(Background {
                show_background: !dimmed,
            }),
            ..Default::default()
        };
        if let Err(e) = consent.update_configuration(update) {
            warn!("Failed to reconfigure consent widget: {e}");
        }
    };

    rsx! {
      article { class: "privacy",
        h2 { "Privacy & cookies" }
        p {
          "We only store what you agree to. Essential cookies are always on; everything else "
          "stays off until you switch it on."
        }

        h3 { "Your current choices" }
        ul { class: "privacy__choices",
          for category in view.categories {
            li { key: "{category.id}",
              span { class: "privacy__category", "{category.name}" }
              span {
                class: if category.checked { "privacy__state is-on" } else { "privacy__state" },
                if category.checked {
                  "Allowed"
                } else {
                  "Blocked"
                }
              }
            }
          }
        }

        div { class: "privacy__actions",
          Button { onclick: move |_| consent.open_preferences(), "Manage cookie preferences" }
          Button {
            variant: ButtonVariant::Secondary,
            onclick: toggle_backdrop,
            if dimmed {
              "Stop dimming the page behind consent dialogs"
            } else {
              "Dim the page behind consent dialogs"
            }
          }
        }
      }
    }
}
