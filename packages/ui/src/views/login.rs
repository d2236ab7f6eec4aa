//! Sign-in form.

use api::{Credentials, SafetyBackend};
use dioxus::prelude::*;

use crate::{use_backend, use_notifier, use_session, AuthRequest};

/// Email/password sign-in. Calls `on_success` after a login and right away
/// when a user is already signed in.
#[component]
pub fn LoginView(on_success: EventHandler<()>, on_signup: EventHandler<()>) -> Element {
    let backend = use_backend();
    let mut session = use_session();
    let mut notifier = use_notifier();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut request = use_signal(AuthRequest::default);

    use_effect(move || {
        if !session.is_loading() && session.is_authenticated() {
            on_success.call(());
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if !request.write().begin() {
            return;
        }
        let credentials = Credentials::new(email().trim(), password());
        let backend = backend.clone();
        spawn(async move {
            let result = backend.sign_in(credentials).await;
            let signed_in = request.write().finish(result);
            if let Some(user) = signed_in {
                let name = user.name.clone();
                session.login(user);
                notifier.success(format!("Welcome back, {name}!"));
            }
        });
    };

    let loading = request.read().is_pending();
    let error = request.read().error().map(str::to_string);

    rsx! {
        section {
            class: "auth-card",
            h1 { "Sign In" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                label { r#for: "login-email", "Email Address" }
                input {
                    id: "login-email",
                    class: "form-input",
                    r#type: "email",
                    autocomplete: "email",
                    required: true,
                    disabled: loading,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    class: "form-input",
                    r#type: "password",
                    autocomplete: "current-password",
                    required: true,
                    disabled: loading,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if let Some(err) = error {
                    div { class: "inline-error", role: "alert", "{err}" }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-block",
                    disabled: loading,
                    if loading { "Signing in..." } else { "Sign In" }
                }
            }

            p {
                class: "auth-switch",
                button {
                    class: "link",
                    onclick: move |_| on_signup.call(()),
                    "Don't have an account? Sign Up"
                }
            }
        }
    }
}
