use api::SafetyBackend;
use chrono::Utc;
use dioxus::prelude::*;

use crate::fetch::{use_fetch, Loadable};
use crate::use_backend;
use crate::views::{ErrorBanner, LoadingIndicator};

/// Recent safety alerts, newest first as served by the backend.
#[component]
pub fn AlertsView() -> Element {
    let backend = use_backend();
    let alerts = use_fetch(move || async move { backend.fetch_alerts().await });

    let state = alerts.read().state().clone();
    let alerts = match state {
        Loadable::Loading => return rsx! { LoadingIndicator { label: "Loading alerts..." } },
        Loadable::Failed(message) => return rsx! { ErrorBanner { message } },
        Loadable::Ready(alerts) => alerts,
    };
    let now = Utc::now();

    rsx! {
        section {
            class: "page-card",
            h1 { "Safety Alerts" }
            if alerts.is_empty() {
                p { class: "empty-state", "No current alerts." }
            } else {
                ul {
                    class: "alert-list",
                    for alert in alerts {
                        li {
                            key: "{alert.id}",
                            class: "alert-item",
                            div {
                                class: "alert-body",
                                strong { "{alert.location}" }
                                p { "{alert.description}" }
                                time {
                                    datetime: alert.timestamp.to_rfc3339(),
                                    title: alert.local_time(),
                                    {alert.age_label(now)}
                                }
                            }
                            span {
                                class: format!("chip chip-{}", alert.severity.tone()),
                                "{alert.severity}"
                            }
                        }
                    }
                }
            }
        }
    }
}
