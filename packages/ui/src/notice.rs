//! Single-slot notice broadcaster.
//!
//! At most one notice is visible. A new [`Notifier::show`] replaces the current
//! notice and restarts the auto-hide timer; the timer of a replaced or
//! dismissed notice never clears anything, because each timer only holds the
//! [`NoticeTicket`] of the notice it was started for.

use std::fmt;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use store::NoticeConfig;

use crate::ContextError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeSeverity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeSeverity::Success => "success",
            NoticeSeverity::Info => "info",
            NoticeSeverity::Warning => "warning",
            NoticeSeverity::Error => "error",
        }
    }
}

impl fmt::Display for NoticeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: NoticeSeverity,
}

/// Identifies one `show` call. Only the ticket of the visible notice can expire it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeTicket(u64);

/// Why a dismissal was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    /// A click somewhere outside the notice. Always ignored.
    ClickAway,
    CloseButton,
    Timeout,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeSlot {
    active: Option<Notice>,
    generation: u64,
}

impl NoticeSlot {
    pub fn active(&self) -> Option<&Notice> {
        self.active.as_ref()
    }

    /// Replace whatever is visible. Last write wins.
    pub fn show(&mut self, message: impl Into<String>, severity: NoticeSeverity) -> NoticeTicket {
        self.generation += 1;
        self.active = Some(Notice {
            message: message.into(),
            severity,
        });
        NoticeTicket(self.generation)
    }

    /// Ticket the auto-hide timer should wait on, if a notice is visible.
    pub fn pending_ticket(&self) -> Option<NoticeTicket> {
        self.active.as_ref().map(|_| NoticeTicket(self.generation))
    }

    /// Auto-hide for `ticket`. No-op unless `ticket` belongs to the visible notice.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 != self.generation || self.active.is_none() {
            return false;
        }
        self.clear();
        true
    }

    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        match reason {
            DismissReason::ClickAway => false,
            DismissReason::CloseButton | DismissReason::Timeout => {
                if self.active.is_none() {
                    return false;
                }
                self.clear();
                true
            }
        }
    }

    /// Drop the visible notice and invalidate its ticket.
    pub fn clear(&mut self) {
        self.active = None;
        self.generation += 1;
    }
}

/// Handle to the notice slot provided by [`NoticeProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    slot: Signal<NoticeSlot>,
}

impl Notifier {
    pub fn active(&self) -> Option<Notice> {
        self.slot.read().active().cloned()
    }

    pub fn show(&mut self, message: impl Into<String>, severity: NoticeSeverity) {
        let message = message.into();
        tracing::debug!(%severity, %message, "showing notice");
        self.slot.write().show(message, severity);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, NoticeSeverity::Success);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message, NoticeSeverity::Info);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, NoticeSeverity::Error);
    }

    pub fn dismiss(&mut self, reason: DismissReason) {
        if reason == DismissReason::ClickAway {
            tracing::trace!("ignoring click-away dismissal");
            return;
        }
        self.slot.write().dismiss(reason);
    }

    /// Clear the slot. Test isolation only.
    pub fn reset(&mut self) {
        self.slot.set(NoticeSlot::default());
    }
}

pub fn try_use_notifier() -> Result<Notifier, ContextError> {
    use_hook(try_consume_context::<Notifier>).ok_or(ContextError::MissingProvider("NoticeProvider"))
}

/// Get the notifier handle.
///
/// # Panics
///
/// Panics when no [`NoticeProvider`] is mounted above the caller.
pub fn use_notifier() -> Notifier {
    match try_use_notifier() {
        Ok(notifier) => notifier,
        Err(e) => panic!("{e}"),
    }
}

/// Owns the notice slot and its auto-hide timer, and renders the toast.
#[component]
pub fn NoticeProvider(#[props(default)] config: NoticeConfig, children: Element) -> Element {
    let slot = use_signal(NoticeSlot::default);
    use_context_provider(|| Notifier { slot });
    let mut timer = use_signal(|| Option::<Task>::None);
    let auto_hide: Duration = config.auto_hide();

    // Restart the timer whenever the visible notice changes.
    use_effect(move || {
        let pending = slot.read().pending_ticket();
        if let Some(task) = timer.write().take() {
            task.cancel();
        }
        let Some(ticket) = pending else {
            return;
        };
        let mut slot = slot;
        let task = spawn(async move {
            api::delay::sleep(auto_hide).await;
            if slot.write().expire(ticket) {
                tracing::debug!("notice auto-hidden");
            }
        });
        timer.set(Some(task));
    });

    rsx! {
        {children}
        crate::NoticeToast {}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::core::NoOpMutations;
    use tokio::time::{sleep_until, Instant};

    use super::*;

    thread_local! {
        static NOTIFIER: Cell<Option<Notifier>> = const { Cell::new(None) };
    }

    #[component]
    fn CaptureNotifier() -> Element {
        let notifier = use_notifier();
        NOTIFIER.with(|slot| slot.set(Some(notifier)));
        rsx! {}
    }

    fn app() -> Element {
        rsx! {
            NoticeProvider {
                CaptureNotifier {}
            }
        }
    }

    /// Drive the dom until `by` has elapsed on the (paused) clock.
    async fn advance(dom: &mut VirtualDom, by: Duration) {
        let deadline = Instant::now() + by;
        loop {
            let worked = tokio::select! {
                _ = dom.wait_for_work() => true,
                _ = sleep_until(deadline) => false,
            };
            if !worked {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn mount() -> (VirtualDom, Notifier) {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let notifier = NOTIFIER.with(|slot| slot.get()).expect("notifier captured on mount");
        (dom, notifier)
    }

    fn visible(dom: &VirtualDom, notifier: Notifier) -> Option<String> {
        dom.in_runtime(|| notifier.active().map(|n| n.message))
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_hides_after_five_seconds() {
        let (mut dom, mut notifier) = mount();
        dom.in_runtime(|| notifier.success("Saved"));

        advance(&mut dom, Duration::from_millis(4900)).await;
        assert_eq!(visible(&dom, notifier).as_deref(), Some("Saved"));

        advance(&mut dom, Duration::from_millis(200)).await;
        assert_eq!(visible(&dom, notifier), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replacing_notice_restarts_timer() {
        let (mut dom, mut notifier) = mount();
        dom.in_runtime(|| notifier.success("A"));
        advance(&mut dom, Duration::from_millis(3000)).await;

        dom.in_runtime(|| notifier.info("B"));
        advance(&mut dom, Duration::from_millis(2500)).await;
        assert_eq!(visible(&dom, notifier).as_deref(), Some("B"));

        advance(&mut dom, Duration::from_millis(2600)).await;
        assert_eq!(visible(&dom, notifier), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_button_then_new_notice_keeps_full_timeout() {
        let (mut dom, mut notifier) = mount();
        dom.in_runtime(|| notifier.error("A"));
        advance(&mut dom, Duration::from_millis(4000)).await;

        dom.in_runtime(|| {
            notifier.dismiss(DismissReason::CloseButton);
            notifier.success("C");
        });
        advance(&mut dom, Duration::from_millis(1500)).await;
        assert_eq!(visible(&dom, notifier).as_deref(), Some("C"));

        dom.in_runtime(|| notifier.dismiss(DismissReason::ClickAway));
        advance(&mut dom, Duration::from_millis(100)).await;
        assert_eq!(visible(&dom, notifier).as_deref(), Some("C"));
    }

    #[test]
    fn test_show_replaces_active() {
        let mut slot = NoticeSlot::default();
        slot.show("A", NoticeSeverity::Success);
        slot.show("B", NoticeSeverity::Info);
        let active = slot.active().unwrap();
        assert_eq!(active.message, "B");
        assert_eq!(active.severity, NoticeSeverity::Info);
    }

    #[test]
    fn test_superseded_ticket_never_expires() {
        let mut slot = NoticeSlot::default();
        let first = slot.show("A", NoticeSeverity::Success);
        let second = slot.show("B", NoticeSeverity::Success);

        assert!(!slot.expire(first));
        assert_eq!(slot.active().map(|n| n.message.as_str()), Some("B"));

        assert!(slot.expire(second));
        assert!(slot.active().is_none());
    }

    #[test]
    fn test_click_away_is_ignored() {
        let mut slot = NoticeSlot::default();
        slot.show("A", NoticeSeverity::Warning);
        assert!(!slot.dismiss(DismissReason::ClickAway));
        assert_eq!(slot.active().map(|n| n.message.as_str()), Some("A"));
    }

    #[test]
    fn test_close_and_timeout_clear() {
        let mut slot = NoticeSlot::default();
        slot.show("A", NoticeSeverity::Success);
        assert!(slot.dismiss(DismissReason::CloseButton));
        assert!(slot.active().is_none());

        slot.show("B", NoticeSeverity::Success);
        assert!(slot.dismiss(DismissReason::Timeout));
        assert!(slot.active().is_none());
        assert!(!slot.dismiss(DismissReason::Timeout));
    }

    #[test]
    fn test_dismiss_cancels_pending_expiry() {
        let mut slot = NoticeSlot::default();
        let ticket = slot.show("A", NoticeSeverity::Success);
        slot.dismiss(DismissReason::CloseButton);
        let later = slot.show("C", NoticeSeverity::Error);

        assert!(!slot.expire(ticket));
        assert_eq!(slot.active().map(|n| n.message.as_str()), Some("C"));
        assert_eq!(slot.pending_ticket(), Some(later));
    }

    #[test]
    fn test_pending_ticket_tracks_visibility() {
        let mut slot = NoticeSlot::default();
        assert!(slot.pending_ticket().is_none());
        let ticket = slot.show("A", NoticeSeverity::Success);
        assert_eq!(slot.pending_ticket(), Some(ticket));
        slot.expire(ticket);
        assert!(slot.pending_ticket().is_none());
    }

    #[test]
    fn test_default_severity_is_success() {
        assert_eq!(NoticeSeverity::default(), NoticeSeverity::Success);
    }
}
