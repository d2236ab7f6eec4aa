//! This crate contains all shared UI for the workspace: the provider stack
//! (backend, session, notices), the data-loading hook and the views.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const SAFETY_CSS: Asset = asset!("/assets/safety.css");

mod error;
pub use error::{ContextError, FormError, GeoError};

mod backend;
pub use backend::{make_backend, try_use_backend, use_backend, SafetyProvider};

mod session;
pub use session::{try_use_session, use_session, Session, SessionProvider, SessionState};

pub mod notice;
pub use notice::{
    try_use_notifier, use_notifier, DismissReason, Notice, NoticeProvider, NoticeSeverity,
    NoticeSlot, NoticeTicket, Notifier,
};

mod notice_toast;
pub use notice_toast::NoticeToast;

pub mod fetch;
pub use fetch::{use_fetch, FetchCell, Loadable};

pub mod incident_form;
pub use incident_form::{FormPhase, IncidentForm};

mod report_incident_modal;
pub use report_incident_modal::ReportIncidentModal;

mod auth_request;
pub use auth_request::AuthRequest;

mod header;
pub use header::Header;

mod account_menu;
pub use account_menu::AccountMenu;

pub mod geolocation;
pub use geolocation::{use_device_position, DevicePosition, GeoPoint, DEFAULT_POSITION};

pub mod views;
