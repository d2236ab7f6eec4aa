use api::SafetyBackend;
use dioxus::prelude::*;

use crate::fetch::{use_fetch, Loadable};
use crate::use_backend;
use crate::views::{ErrorBanner, LoadingIndicator};

/// Safety tips as expandable items.
#[component]
pub fn TipsView() -> Element {
    let backend = use_backend();
    let tips = use_fetch(move || async move { backend.fetch_tips().await });

    let state = tips.read().state().clone();
    let tips = match state {
        Loadable::Loading => return rsx! { LoadingIndicator { label: "Loading tips..." } },
        Loadable::Failed(message) => return rsx! { ErrorBanner { message } },
        Loadable::Ready(tips) => tips,
    };

    rsx! {
        section {
            h1 { "Safety Tips" }
            if tips.is_empty() {
                p { class: "empty-state", "No tips available right now." }
            } else {
                for tip in tips {
                    details {
                        key: "{tip.id}",
                        class: "tip-item",
                        id: "panel-{tip.id}",
                        summary {
                            span { class: "tip-category", "{tip.category}" }
                            span { class: "tip-title", "{tip.title}" }
                        }
                        p { class: "tip-details", "{tip.details}" }
                    }
                }
            }
        }
    }
}
