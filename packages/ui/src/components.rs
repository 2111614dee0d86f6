//! Form primitives shared by every view.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Destructive => "btn btn-destructive",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default = "button".to_string())] kind: String,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: kind,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "form-label",
            r#for: html_for,
            {children}
        }
    }
}

/// Text input. `error` renders under the field and marks it invalid.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] required: bool,
    error: Option<String>,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let classes = if error.is_some() {
        format!("form-input invalid {class}")
    } else {
        format!("form-input {class}")
    };
    rsx! {
        input {
            id,
            class: classes,
            r#type: kind,
            placeholder,
            required,
            value,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
        if let Some(message) = error {
            p { class: "form-error", "{message}" }
        }
    }
}

/// Labelled text field: a [`Label`] above an [`Input`].
#[component]
pub fn Field(
    id: String,
    label: String,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] value: String,
    #[props(default)] required: bool,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    let text = if required { format!("{label} *") } else { label };
    rsx! {
        div {
            class: "form-field",
            Label { html_for: id.clone(), "{text}" }
            Input {
                id,
                kind,
                value,
                required,
                error,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}
