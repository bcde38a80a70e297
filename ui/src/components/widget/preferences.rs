use consent::{CategoryState, ConsentSettings};
use dioxus::prelude::*;

use super::focus_trap::{use_focus_trap, FocusTrap};
use crate::{use_consent, Button, ButtonVariant, Checkbox};

/// Host node of the preferences panel. Always present, hidden while closed;
/// the dialog itself is only mounted while open so its focus trap collects
/// controls afresh each time.
#[component]
pub fn PreferencesPanel(
    open: bool,
    settings: ConsentSettings,
    categories: Vec<CategoryState>,
) -> Element {
    rsx! {
      div {
        id: "consent-preferences",
        "data-consent": "preferences",
        class: "consent-preferences",
        hidden: !open,
        if open {
          PreferencesDialog { settings, categories }
        }
      }
    }
}

#[component]
fn PreferencesDialog(settings: ConsentSettings, categories: Vec<CategoryState>) -> Element {
    let mut consent = use_consent();
    let text = settings.text.preferences;
    let banner_text = settings.text.banner;

    // slot 0 is the close button, interactive categories follow, then the two choices
    let mut next_slot = 1;
    let rows: Vec<(CategoryState, Option<usize>)> = categories
        .into_iter()
        .map(|category| {
            let slot = (!category.required).then(|| {
                next_slot += 1;
                next_slot - 1
            });
            (category, slot)
        })
        .collect();
    let accept_slot = next_slot;
    let reject_slot = next_slot + 1;
    let trap = use_focus_trap(next_slot + 2);

    rsx! {
      div {
        class: "consent-preferences__dialog",
        role: "dialog",
        "aria-modal": "true",
        "aria-labelledby": "consent-preferences-title",
        onkeydown: move |evt| {
            if evt.key() == Key::Escape {
                consent.close_preferences();
            } else {
                trap.handle_keydown(&evt);
            }
        },

        header { class: "consent-preferences__header",
          h2 { id: "consent-preferences-title", "{text.title}" }
          Button {
            variant: ButtonVariant::Link,
            class: "consent-preferences__close",
            label: text.close_button_accessible_label.clone(),
            onclick: move |_| consent.close_preferences(),
            onmounted: move |evt: MountedEvent| {
                trap.mounted(0, evt);
                trap.focus(0);
            },
            onfocus: move |_: FocusEvent| trap.focused(0),
            svg {
              width: "20",
              height: "20",
              fill: "none",
              stroke: "currentColor",
              view_box: "0 0 24 24",
              path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M6 18L18 6M6 6l12 12",
              }
            }
          }
        }

        p { class: "consent-preferences__description", "{text.description}" }

        section { class: "consent-preferences__categories",
          for (category, slot) in rows {
            CategoryRow { key: "{category.id}", category: category.clone(), slot, trap }
          }
        }

        footer { class: "consent-preferences__footer",
          Button {
            onclick: move |_| consent.accept_all(),
            label: banner_text.accept_all_button_accessible_label.clone(),
            onmounted: move |evt: MountedEvent| trap.mounted(accept_slot, evt),
            onfocus: move |_: FocusEvent| trap.focused(accept_slot),
            "{banner_text.accept_all_button_text}"
          }
          Button {
            variant: ButtonVariant::Secondary,
            onclick: move |_| consent.reject_all(),
            label: banner_text.reject_non_essential_button_accessible_label.clone(),
            onmounted: move |evt: MountedEvent| trap.mounted(reject_slot, evt),
            onfocus: move |_: FocusEvent| trap.focused(reject_slot),
            "{banner_text.reject_non_essential_button_text}"
          }
        }
      }
    }
}

#[component]
fn CategoryRow(
    category: CategoryState,
    #[props(!optional)] slot: Option<usize>,
    trap: FocusTrap,
) -> Element {
    let mut consent = use_consent();
    let id = category.id.clone();

    rsx! {
      fieldset { class: "consent-category", "data-category": "{category.id}",
        legend { class: "consent-category__name",
          label { r#for: "consent-toggle-{category.id}", "{category.name}" }
        }
        Checkbox {
          id: "consent-toggle-{category.id}",
          checked: category.checked,
          disabled: category.required,
          onchange: move |checked: bool| consent.toggle(&id, checked),
          onmounted: move |evt: MountedEvent| {
              if let Some(slot) = slot {
                  trap.mounted(slot, evt);
              }
          },
          onfocus: move |_: FocusEvent| {
              if let Some(slot) = slot {
                  trap.focused(slot);
              }
          },
        }
        if !category.description.is_empty() {
          p { class: "consent-category__description", "{category.description}" }
        }
      }
    }
}
