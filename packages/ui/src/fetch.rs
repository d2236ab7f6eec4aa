//! One-shot data loading for views.
//!
//! [`use_fetch`] starts a single backend call when the calling component
//! mounts and exposes its progress as a [`FetchCell`]. Results that arrive
//! after the component unmounted, or after a newer fetch began, are dropped.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use api::ApiError;
use dioxus::prelude::*;

/// The three observable phases of a fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Failed(String),
    Ready(T),
}

/// Identifies one fetch started by [`FetchCell::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchEpoch(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct FetchCell<T> {
    epoch: u64,
    state: Loadable<T>,
}

impl<T> Default for FetchCell<T> {
    fn default() -> Self {
        Self {
            epoch: 0,
            state: Loadable::Loading,
        }
    }
}

impl<T> FetchCell<T> {
    pub fn state(&self) -> &Loadable<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, Loadable::Loading)
    }

    /// Enter `Loading` and supersede any fetch still in flight.
    pub fn begin(&mut self) -> FetchEpoch {
        self.epoch += 1;
        self.state = Loadable::Loading;
        FetchEpoch(self.epoch)
    }

    /// Store the outcome of the fetch identified by `epoch`.
    /// Returns `false` and leaves the cell untouched for a stale epoch.
    pub fn settle(&mut self, epoch: FetchEpoch, result: Result<T, ApiError>) -> bool {
        if epoch.0 != self.epoch {
            return false;
        }
        self.state = match result {
            Ok(data) => Loadable::Ready(data),
            Err(e) => Loadable::Failed(e.to_string()),
        };
        true
    }
}

/// Tracks whether the component that started a fetch is still mounted.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl Default for MountGuard {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl MountGuard {
    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

/// Run `fetch` once for this mount and track its result.
pub fn use_fetch<T, F, Fut>(fetch: F) -> Signal<FetchCell<T>>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let cell = use_signal(FetchCell::<T>::default);
    let guard = use_hook(MountGuard::default);

    use_hook({
        let guard = guard.clone();
        move || {
            let mut cell = cell;
            let epoch = cell.write().begin();
            spawn(async move {
                let result = fetch().await;
                if !guard.is_mounted() {
                    tracing::debug!("dropping fetch result for unmounted view");
                    return;
                }
                if !cell.write().settle(epoch, result) {
                    tracing::debug!("dropping stale fetch result");
                }
            });
        }
    });

    use_drop(move || guard.release());

    cell
}
