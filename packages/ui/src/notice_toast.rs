use dioxus::prelude::*;

use crate::notice::{use_notifier, DismissReason, NoticeSeverity};

/// Renders the active notice, if any, in the top-right corner.
#[component]
pub fn NoticeToast() -> Element {
    let mut notifier = use_notifier();

    let Some(notice) = notifier.active() else {
        return rsx! {};
    };

    let class = match notice.severity {
        NoticeSeverity::Error => "notice-toast error",
        NoticeSeverity::Warning => "notice-toast warning",
        NoticeSeverity::Success => "notice-toast success",
        NoticeSeverity::Info => "notice-toast info",
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
            span { class: "notice-toast-message", "{notice.message}" }
            button {
                class: "notice-toast-close",
                aria_label: "Close",
                onclick: move |_| notifier.dismiss(DismissReason::CloseButton),
                "×"
            }
        }
    }
}
