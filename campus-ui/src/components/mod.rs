//! UI Components
//!
//! Leptos components for the signup page.

pub mod activities;
pub mod header;
pub mod login;
pub mod signup;
pub mod toast;

pub use activities::ActivityList;
pub use header::Header;
pub use login::LoginForm;
pub use signup::SignupForm;
pub use toast::Toast;
