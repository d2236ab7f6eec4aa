use dioxus::prelude::*;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(%path, "no route matched");
    rsx! {
        section {
            class: "page-card",
            h1 { "404 Not Found" }
            p { "Nothing lives at {path}." }
        }
    }
}
