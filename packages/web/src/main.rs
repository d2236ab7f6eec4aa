use dioxus::prelude::*;
use store::SafetyConfig;

use ui::SafetyProvider;
use views::{Alerts, AppLayout, Faq, Home, Login, Map, NotFound, Signup, Tips};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/map")]
        Map {},
        #[route("/alerts")]
        Alerts {},
        #[route("/tips")]
        Tips {},
        #[route("/faq")]
        Faq {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const EMBEDDED_CONFIG: &str = include_str!("../safety.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Parse the bundled config, falling back to defaults if it is invalid.
fn load_config(source: &str) -> SafetyConfig {
    match SafetyConfig::from_toml(source) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(file = SafetyConfig::filename(), "invalid config, using defaults: {e}");
            SafetyConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(EMBEDDED_CONFIG));

    rsx! {
        document::Title { "Safety Companion" }
        document::Link { rel: "stylesheet", href: ui::SAFETY_CSS }

        SafetyProvider {
            config,
            Router::<Route> {}
        }
    }
}
