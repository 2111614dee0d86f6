//! Account creation page.

use dioxus::prelude::*;
use shop::{FieldErrors, SignupForm};
use ui::components::{Button, ButtonVariant, Field};
use ui::icons::FaLock;
use ui::{sleep_ms, use_api, use_config, use_notices, Icon};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let api = use_api();
    let config = use_config();
    let notices = use_notices();
    let nav = use_navigator();

    let mut form = use_signal(SignupForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);
    let redirect_delay = config.ui.redirect_delay_ms;

    let submit = move |_: MouseEvent| {
        let account = match form.read().validate() {
            Ok(account) => account,
            Err(invalid) => {
                notices.error(invalid.to_string());
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        submitting.set(true);

        let api = api.clone();
        spawn(async move {
            match api.sign_up(&account).await {
                Ok(()) => {
                    tracing::info!("account created");
                    notices.success(format!(
                        "Account created successfully for {} {}!",
                        account.first_name, account.last_name
                    ));
                    form.set(SignupForm::default());
                    sleep_ms(redirect_delay).await;
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("sign-up failed: {e}");
                    notices.error("Signup failed. Please try again.");
                }
            }
            submitting.set(false);
        });
    };

    let draft = form.read().clone();
    let error = move |field: &str| errors.read().get(field).map(str::to_string);

    rsx! {
        div {
            class: "auth-page",
            div { class: "auth-icon", Icon { icon: FaLock, width: 24, height: 24 } }
            h1 { "Sign up" }
            Field {
                id: "signup-first-name",
                label: "First Name",
                required: true,
                value: draft.first_name,
                error: error("firstName"),
                oninput: move |v: String| form.write().first_name = v,
            }
            Field {
                id: "signup-last-name",
                label: "Last Name",
                required: true,
                value: draft.last_name,
                error: error("lastName"),
                oninput: move |v: String| form.write().last_name = v,
            }
            Field {
                id: "signup-email",
                label: "Email Address",
                kind: "email",
                required: true,
                value: draft.email,
                error: error("email"),
                oninput: move |v: String| form.write().email = v,
            }
            Field {
                id: "signup-password",
                label: "Password",
                kind: "password",
                required: true,
                value: draft.password,
                error: error("password"),
                oninput: move |v: String| form.write().password = v,
            }
            Field {
                id: "signup-confirm-password",
                label: "Confirm Password",
                kind: "password",
                required: true,
                value: draft.confirm_password,
                error: error("confirmPassword"),
                oninput: move |v: String| form.write().confirm_password = v,
            }
            Field {
                id: "signup-contact",
                label: "Contact Number",
                required: true,
                value: draft.contact_number,
                error: error("contactNumber"),
                oninput: move |v: String| form.write().contact_number = v,
            }
            Button {
                variant: ButtonVariant::Primary,
                class: "auth-submit",
                disabled: submitting(),
                onclick: submit,
                "Sign Up"
            }
            p {
                class: "auth-switch",
                Link { to: Route::Login {}, "Already have an account? Sign in" }
            }
        }
    }
}
