mod alerts;
pub use alerts::AlertsView;

mod faq;
pub use faq::FaqView;

mod home;
pub use home::{Destination, HomeView};

mod login;
pub use login::LoginView;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod not_found;
pub use not_found::NotFoundView;

pub mod risk_map;
pub use risk_map::RiskMapView;

mod signup;
pub use signup::SignupView;

mod status;
pub use status::{ErrorBanner, LoadingIndicator};

mod tips;
pub use tips::TipsView;
