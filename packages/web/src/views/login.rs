use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

/// Sign-in page. Goes home once a user is signed in.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Home {});
            },
            on_signup: move |_| {
                nav.push(Route::Signup {});
            },
        }
    }
}
