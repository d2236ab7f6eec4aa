use dioxus::prelude::*;

/// Placeholder shown while a fetch is in flight.
#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "status-loading",
            role: "status",
            aria_live: "polite",
            span { class: "spinner", aria_hidden: "true" }
            span { "{label}" }
        }
    }
}

/// Inline message replacing a view's content after a failed fetch.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "status-error",
            role: "alert",
            "{message}"
        }
    }
}
