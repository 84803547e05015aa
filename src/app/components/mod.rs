//! Shared UI components for the Dioxus fullstack web UI.

pub mod chat;
pub mod consent_banner;
pub mod error_alert;
pub mod footer;
pub mod form_inputs;
pub mod layout;
pub mod nav;
pub mod theme;

pub use chat::ChatWidget;
pub use consent_banner::ConsentBanner;
pub use error_alert::ErrorAlert;
pub use footer::SiteFooter;
pub use form_inputs::TextField;
pub use layout::Layout;
pub use nav::Nav;
pub use theme::ThemeSwitcher;
