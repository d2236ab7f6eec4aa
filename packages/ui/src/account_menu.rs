//! Account area of the header.

use dioxus::prelude::*;

use crate::icons::FaCircleUser;
use crate::{use_notifier, use_session, Icon};

/// Shows a spinner while the startup session check runs, then either the
/// user's initial with a logout menu or a login button.
#[component]
pub fn AccountMenu(on_login: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut notifier = use_notifier();
    let mut menu_open = use_signal(|| false);

    if session.is_loading() {
        return rsx! {
            span { class: "spinner spinner-light", role: "status", aria_label: "Checking session" }
        };
    }

    let Some(user) = session.user() else {
        return rsx! {
            button {
                class: "btn btn-ghost",
                onclick: move |_| on_login.call(()),
                "Login"
            }
        };
    };

    let handle_logout = move |_| {
        menu_open.set(false);
        session.logout();
        notifier.info("You have been logged out.");
        on_logout.call(());
    };

    let badge = match user.initial() {
        Some(initial) => rsx! { "{initial}" },
        None => rsx! { Icon { icon: FaCircleUser, width: 18, height: 18 } },
    };

    rsx! {
        div {
            class: "account-menu",
            button {
                class: "avatar",
                title: "{user.name}",
                aria_label: "account of current user",
                aria_haspopup: "true",
                aria_expanded: menu_open(),
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    menu_open.toggle();
                },
                {badge}
            }
            if menu_open() {
                ul {
                    class: "menu",
                    role: "menu",
                    li {
                        role: "menuitem",
                        button { onclick: handle_logout, "Logout" }
                    }
                }
            }
        }
    }
}
