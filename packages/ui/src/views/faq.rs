use dioxus::prelude::*;

const FAQS: &[(&str, &str)] = &[
    (
        "How does the app assess risk?",
        "Risk levels combine reported incidents, location context and time of day. Each zone on the map is scored from 1 (low) to 5 (extreme).",
    ),
    (
        "Is my location tracked constantly?",
        "No. Your location is only used while you actively use map features or file a report.",
    ),
    (
        "How are alerts created?",
        "Alerts come from community reports and public safety sources. Reports you submit are reviewed before they appear as alerts.",
    ),
    (
        "How accurate is the risk assessment?",
        "No system is perfect. The map is designed to enhance awareness and provide guidance, not to replace caution and judgment.",
    ),
    (
        "Do I need an account?",
        "Alerts, tips and the map are available to everyone. Signing in personalises the dashboard.",
    ),
    (
        "Is my personal data secure?",
        "Personal data is never shown to other users. Aggregated, anonymised data may be used to improve safety insights.",
    ),
    (
        "Does the app work without an internet connection?",
        "Fetching alerts, tips and risk areas requires a connection. Previously loaded pages stay visible until you navigate away.",
    ),
];

/// Frequently asked questions.
#[component]
pub fn FaqView() -> Element {
    rsx! {
        section {
            class: "page-card",
            h1 { "Frequently Asked Questions" }
            for (index, (question, answer)) in FAQS.iter().enumerate() {
                details {
                    key: "{index}",
                    class: "faq-item",
                    summary { "{question}" }
                    p { "{answer}" }
                }
            }
        }
    }
}
