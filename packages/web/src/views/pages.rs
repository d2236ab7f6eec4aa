use dioxus::prelude::*;
use ui::views::{AlertsView, Destination, FaqView, HomeView, NotFoundView, RiskMapView, TipsView};

use crate::Route;

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Map => Route::Map {},
            Destination::Alerts => Route::Alerts {},
            Destination::Tips => Route::Tips {},
            Destination::Faq => Route::Faq {},
        }
    }
}

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        HomeView {
            on_navigate: move |destination: Destination| {
                nav.push(Route::from(destination));
            },
        }
    }
}

#[component]
pub fn Map() -> Element {
    rsx! { RiskMapView {} }
}

#[component]
pub fn Alerts() -> Element {
    rsx! { AlertsView {} }
}

#[component]
pub fn Tips() -> Element {
    rsx! { TipsView {} }
}

#[component]
pub fn Faq() -> Element {
    rsx! { FaqView {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { NotFoundView { segments } }
}
