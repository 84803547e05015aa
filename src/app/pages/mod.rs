//! Dioxus page components, one module per route.

mod about;
mod billing;
mod blog;
mod checkout;
mod dashboard;
mod forgot_password;
mod home;
mod legal;
mod login;
mod not_found;
mod oauth_callback;
mod pricing;
mod register;

pub use about::About;
pub use billing::Billing;
pub use blog::{BlogArticle, BlogIndex};
pub use checkout::Checkout;
pub use dashboard::{
    Dashboard, DashboardCompare, DashboardHeatmap, DashboardReports, DashboardRules,
};
pub use forgot_password::ForgotPassword;
pub use home::Home;
pub use legal::Legal;
pub use login::Login;
pub use not_found::NotFound;
pub use oauth_callback::OauthCallback;
pub use pricing::Pricing;
pub use register::Register;
