//! Sign-in page.

use dioxus::prelude::*;
use shop::{FieldErrors, LoginForm};
use ui::components::{Button, ButtonVariant, Field};
use ui::icons::FaLock;
use ui::{use_api, use_notices, use_session, Icon};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut session = use_session();
    let notices = use_notices();
    let nav = use_navigator();

    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut failure = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        let credentials = match form.read().validate() {
            Ok(credentials) => credentials,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        failure.set(None);
        submitting.set(true);

        let api = api.clone();
        spawn(async move {
            match api.sign_in(&credentials).await {
                Ok(signed_in) => {
                    session.write().login(signed_in.role, &signed_in.token);
                    nav.push(Route::ProductList {});
                }
                Err(e) => {
                    tracing::warn!("sign-in failed: {e}");
                    let message = e
                        .server_message()
                        .unwrap_or("Invalid credentials. Please try again.")
                        .to_string();
                    notices.error(message.clone());
                    failure.set(Some(message));
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
            h1 { "Sign in" }
            if let Some(message) = failure() {
                p { class: "form-error", "{message}" }
            }
            Field {
                id: "login-email",
                label: "Email Address",
                kind: "email",
                required: true,
                value: draft.username,
                error: error("username"),
                oninput: move |v: String| form.write().username = v,
            }
            Field {
                id: "login-password",
                label: "Password",
                kind: "password",
                required: true,
                value: draft.password,
                error: error("password"),
                oninput: move |v: String| form.write().password = v,
            }
            Button {
                variant: ButtonVariant::Primary,
                class: "auth-submit",
                disabled: submitting(),
                onclick: submit,
                "Sign In"
            }
            p {
                class: "auth-switch",
                Link { to: Route::Signup {}, "Don't have an account? Sign Up" }
            }
        }
    }
}
