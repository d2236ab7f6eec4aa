//! Session context and hooks for the UI.
//!
//! [`SessionState`] is the plain state machine; [`Session`] is the copyable
//! handle that components get from [`use_session`] once a [`SessionProvider`]
//! is mounted above them.

use dioxus::prelude::*;
use store::{SessionConfig, User};

use crate::ContextError;

/// Who is logged in, if anyone.
///
/// `is_authenticated()` is derived from `user`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    user: Option<User>,
    loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::bootstrapping()
    }
}

impl SessionState {
    /// Initial state while the startup session check is pending.
    pub fn bootstrapping() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the session with `user`.
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.loading = false;
    }

    /// End the startup check. Returns `false` if it already ended, including
    /// when a login or logout happened first.
    pub fn finish_bootstrap(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        true
    }
}

/// Handle to the session signal provided by [`SessionProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    state: Signal<SessionState>,
}

impl Session {
    /// Snapshot of the current state. Subscribes the caller to changes.
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading()
    }

    pub fn login(&mut self, user: User) {
        tracing::info!(user_id = %user.id, "session login");
        self.state.write().login(user);
    }

    pub fn logout(&mut self) {
        tracing::info!("session logout");
        self.state.write().logout();
    }

    /// Return to the initial bootstrapping state. Test isolation only; the
    /// startup check is not rescheduled.
    pub fn reset(&mut self) {
        self.state.set(SessionState::bootstrapping());
    }
}

/// Get the session handle, or the reason it is unavailable.
pub fn try_use_session() -> Result<Session, ContextError> {
    use_hook(try_consume_context::<Session>).ok_or(ContextError::MissingProvider("SessionProvider"))
}

/// Get the session handle.
///
/// # Panics
///
/// Panics when no [`SessionProvider`] is mounted above the caller.
pub fn use_session() -> Session {
    match try_use_session() {
        Ok(session) => session,
        Err(e) => panic!("{e}"),
    }
}

/// Provider component that owns the session state.
/// Wrap your app with this component to enable login and logout.
#[component]
pub fn SessionProvider(#[props(default)] config: SessionConfig, children: Element) -> Element {
    let state = use_signal(SessionState::bootstrapping);
    use_context_provider(|| Session { state });

    // Simulated session check, once per provider mount.
    use_hook(move || {
        let delay = config.bootstrap_delay();
        let mut state = state;
        spawn(async move {
            api::delay::sleep(delay).await;
            if state.write().finish_bootstrap() {
                tracing::debug!("session check complete, no stored session");
            }
        });
    });

    rsx! {
        {children}
    }
}
