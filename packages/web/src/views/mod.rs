//! Route components. Each wraps a shared view from `ui` and turns its
//! callbacks into navigation.

mod layout;
pub use layout::AppLayout;

mod pages;
pub use pages::{Alerts, Faq, Home, Map, NotFound, Tips};

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;
