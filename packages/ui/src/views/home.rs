use dioxus::prelude::*;

use crate::icons::{FaBell, FaCircleQuestion, FaLightbulb, FaMap, FaTriangleExclamation};
use crate::{use_session, Icon, ReportIncidentModal};

/// Pages reachable from the dashboard cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Map,
    Alerts,
    Tips,
    Faq,
}

/// Landing dashboard with the report call-to-action.
#[component]
pub fn HomeView(on_navigate: EventHandler<Destination>) -> Element {
    let session = use_session();
    let mut report_open = use_signal(|| false);

    let greeting = match session.user() {
        Some(user) => format!("Welcome, {}! Stay Safe!", user.name),
        _ => "Welcome! Stay Safe!".to_string(),
    };

    rsx! {
        section {
            class: "home",
            h1 { class: "home-title", "{greeting}" }
            p {
                class: "home-intro",
                "Your personal safety dashboard. Check the map for risk assessments, view recent alerts, access safety tips, and report concerns you observe."
            }

            div {
                class: "report-cta",
                h2 { "Observe Something?" }
                p { "Help keep the community safe by reporting incidents or concerns." }
                button {
                    class: "btn btn-pill",
                    onclick: move |_| report_open.set(true),
                    Icon { icon: FaTriangleExclamation, width: 16, height: 16 }
                    " Report a Concern"
                }
            }

            div {
                class: "dashboard-grid",
                DashboardCard {
                    title: "Safety Map",
                    body: "View risk zones and plan safe routes.",
                    action: "View Map",
                    on_open: move |_| on_navigate.call(Destination::Map),
                    Icon { icon: FaMap, width: 28, height: 28 }
                }
                DashboardCard {
                    title: "Alerts",
                    body: "Check the latest safety alerts in your area.",
                    action: "View Alerts",
                    on_open: move |_| on_navigate.call(Destination::Alerts),
                    Icon { icon: FaBell, width: 28, height: 28 }
                }
                DashboardCard {
                    title: "Safety Tips",
                    body: "Practical advice for staying safe day and night.",
                    action: "Get Tips",
                    on_open: move |_| on_navigate.call(Destination::Tips),
                    Icon { icon: FaLightbulb, width: 28, height: 28 }
                }
                DashboardCard {
                    title: "Help & Support",
                    body: "Read the FAQ for answers to common questions.",
                    action: "Go to FAQ",
                    on_open: move |_| on_navigate.call(Destination::Faq),
                    Icon { icon: FaCircleQuestion, width: 28, height: 28 }
                }
            }
        }

        if report_open() {
            ReportIncidentModal { on_close: move |_| report_open.set(false) }
        }
    }
}

#[component]
fn DashboardCard(
    title: String,
    body: String,
    action: String,
    on_open: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        article {
            class: "dashboard-card",
            div { class: "dashboard-card-icon", {children} }
            h3 { "{title}" }
            p { "{body}" }
            button {
                class: "btn btn-outline btn-small",
                onclick: move |_| on_open.call(()),
                "{action}"
            }
        }
    }
}
