use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct Props {
    #[props(into)]
    id: String,
    checked: bool,
    #[props(optional, default)]
    disabled: bool,
    onchange: EventHandler<bool>,
    onmounted: Option<EventHandler<MountedEvent>>,
    onfocus: Option<EventHandler<FocusEvent>>,
}

/// A switch-styled checkbox reporting its new checked state.
#[component]
pub fn Checkbox(props: Props) -> Element {
    let onchange = props.onchange;
    let onmounted = props.onmounted;
    let onfocus = props.onfocus;

    rsx! {
      label {
        class: "consent-switch",
        class: if props.checked { "is-checked" } else { "" },
        class: if props.disabled { "is-disabled" } else { "" },
        input {
          id: "{props.id}",
          "type": "checkbox",
          checked: props.checked,
          disabled: props.disabled,
          onchange: move |evt| onchange.call(evt.checked()),
          onmounted: move |evt| {
              if let Some(handler) = onmounted {
                  handler.call(evt);
              }
          },
          onfocus: move |evt| {
              if let Some(handler) = onfocus {
                  handler.call(evt);
              }
          },
        }
        span { class: "consent-switch__track",
          span { class: "consent-switch__thumb" }
        }
      }
    }
}
