//! Account creation form.

use api::{SafetyBackend, SignupRequest};
use dioxus::prelude::*;

use crate::{use_backend, use_notifier, AuthRequest};

#[component]
pub fn SignupView(on_success: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let backend = use_backend();
    let mut notifier = use_notifier();
    let mut form = use_signal(SignupRequest::default);
    let mut request = use_signal(AuthRequest::default);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let signup = form();
        if let Err(e) = signup.validate() {
            request.write().reject(e.to_string());
            return;
        }
        if !request.write().begin() {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            let result = backend.sign_up(signup).await;
            let accepted = request.write().finish(result);
            if let Some(message) = accepted {
                form.set(SignupRequest::default());
                notifier.info(message);
                on_success.call(());
            }
        });
    };

    let loading = request.read().is_pending();
    let error = request.read().error().map(str::to_string);

    rsx! {
        section {
            class: "auth-card",
            h1 { "Sign Up" }

            form {
                onsubmit: handle_signup,
                class: "auth-form",

                label { r#for: "signup-name", "Full Name" }
                input {
                    id: "signup-name",
                    class: "form-input",
                    r#type: "text",
                    autocomplete: "name",
                    required: true,
                    disabled: loading,
                    value: form.read().name.clone(),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }

                label { r#for: "signup-email", "Email Address" }
                input {
                    id: "signup-email",
                    class: "form-input",
                    r#type: "email",
                    autocomplete: "email",
                    required: true,
                    disabled: loading,
                    value: form.read().email.clone(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                label { r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
                    class: "form-input",
                    r#type: "password",
                    autocomplete: "new-password",
                    required: true,
                    disabled: loading,
                    value: form.read().password.clone(),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                label { r#for: "signup-confirm", "Confirm Password" }
                input {
                    id: "signup-confirm",
                    class: "form-input",
                    r#type: "password",
                    autocomplete: "new-password",
                    required: true,
                    disabled: loading,
                    value: form.read().confirm_password.clone(),
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }

                if let Some(err) = error {
                    div { class: "inline-error", role: "alert", "{err}" }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: loading,
                    if loading { "Creating account..." } else { "Sign Up" }
                }
            }

            p {
                class: "auth-switch",
                button {
                    class: "link",
                    onclick: move |_| on_login.call(()),
                    "Already have an account? Sign In"
                }
            }
        }
    }
}
