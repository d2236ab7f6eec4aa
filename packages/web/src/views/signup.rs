use dioxus::prelude::*;
use ui::views::SignupView;

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    rsx! {
        SignupView {
            on_success: move |_| {
                nav.push(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
