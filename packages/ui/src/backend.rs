//! Backend context and the provider stack shared by every platform.

use api::MockBackend;
use dioxus::prelude::*;
use store::{SafetyConfig, SeedStore};

use crate::{ContextError, NoticeProvider, SessionProvider};

/// Build the backend described by `config`.
pub fn make_backend(config: &SafetyConfig) -> MockBackend {
    MockBackend::new(SeedStore::default(), config.api.clone())
}

pub fn try_use_backend() -> Result<MockBackend, ContextError> {
    use_hook(try_consume_context::<MockBackend>).ok_or(ContextError::MissingProvider("SafetyProvider"))
}

/// Get the backend.
///
/// # Panics
///
/// Panics when no [`SafetyProvider`] is mounted above the caller.
pub fn use_backend() -> MockBackend {
    match try_use_backend() {
        Ok(backend) => backend,
        Err(e) => panic!("{e}"),
    }
}

/// Provides the backend, the session and the notice broadcaster.
/// Mount once, at the root of the app.
#[component]
pub fn SafetyProvider(#[props(default)] config: SafetyConfig, children: Element) -> Element {
    let backend_config = config.clone();
    use_context_provider(move || make_backend(&backend_config));

    rsx! {
        SessionProvider {
            config: config.session.clone(),
            NoticeProvider {
                config: config.notices.clone(),
                {children}
            }
        }
    }
}
