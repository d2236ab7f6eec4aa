use dioxus::prelude::*;
use ui::{use_notifier, AccountMenu, DismissReason, Header};

use crate::Route;

/// Header above the routed page.
#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();
    let mut notifier = use_notifier();

    rsx! {
        div {
            class: "app-shell",
            onclick: move |_| notifier.dismiss(DismissReason::ClickAway),

            Header {
                on_brand: move |_| {
                    nav.push(Route::Home {});
                },
                account: rsx! {
                    AccountMenu {
                        on_login: move |_| {
                            nav.push(Route::Login {});
                        },
                        on_logout: move |_| {
                            nav.push(Route::Login {});
                        },
                    }
                },
                Link { to: Route::Home {}, active_class: "active", "Home" }
                Link { to: Route::Map {}, active_class: "active", "Map" }
                Link { to: Route::Alerts {}, active_class: "active", "Alerts" }
                Link { to: Route::Tips {}, active_class: "active", "Tips" }
                Link { to: Route::Faq {}, active_class: "active", "FAQ" }
            }

            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
