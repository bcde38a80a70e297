use dioxus::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Link,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "consent-button consent-button--primary",
            ButtonVariant::Secondary => "consent-button consent-button--secondary",
            ButtonVariant::Link => "consent-button consent-button--link",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    children: Element,
    #[props(into)]
    onclick: EventHandler<MouseEvent>,
    #[props(optional, default)]
    variant: ButtonVariant,
    #[props(optional, default)]
    disabled: bool,
    #[props(optional, into)]
    class: String,
    #[props(into)]
    label: Option<String>,
    /// Lets focus traps collect the rendered element
    onmounted: Option<EventHandler<MountedEvent>>,
    onfocus: Option<EventHandler<FocusEvent>>,
}

#[component]
pub fn Button(props: Props) -> Element {
    let variant_classes = props.variant.get_classes();
    let disabled_classes = if props.disabled { "is-disabled" } else { "" };
    let additional_classes = props.class;
    let onmounted = props.onmounted;
    let onfocus = props.onfocus;

    rsx! {
        button {
            class: "{variant_classes} {disabled_classes} {additional_classes}",
            "type": "button",
            "aria-label": props.label,
            onclick: move |evt| {
                if !props.disabled {
                    props.onclick.call(evt)
                }
            },
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
            disabled: props.disabled,
            {props.children}
        }
    }
}
