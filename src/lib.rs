//! # Campus Signup
//!
//! Client-side engine for an extracurricular activity signup page: it keeps
//! the displayed roster in step with the server, tracks the staff session,
//! and re-fetches the full roster after every successful mutation.
//!
//! ## Modules
//!
//! - [`model`]: Activities and the order-preserving collection
//! - [`session`]: Session store and the chrome derived from it
//! - [`render`]: Pure roster renderer producing a typed view
//! - [`notify`]: Single-slot notifications with superseding hide-timers
//! - [`api`]: The backend HTTP contract and transports
//! - [`dispatch`]: Mutation dispatcher and its response policy
//! - [`controller`]: Bootstrap and event → command routing
//! - [`page`]: The DOM surface hosts implement
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use campus_signup::{AppController, Dispatcher, HttpApi, NoopScheduler};
//! # use campus_signup::{Chrome, FormRef, NoticeSurface, Notification, Page, Roster};
//! # #[derive(Clone)]
//! # struct Stdout;
//! # impl NoticeSurface for Stdout {
//! #     fn show_notification(&self, n: &Notification) { println!("{}", n.text) }
//! #     fn hide_notification(&self) {}
//! # }
//! # impl Page for Stdout {
//! #     fn apply_chrome(&self, _: &Chrome) {}
//! #     fn show_roster(&self, roster: &Roster) { println!("{}", roster.to_text()) }
//! #     fn set_activity_choices(&self, _: &[String]) {}
//! #     fn reset_form(&self, _: &FormRef) {}
//! #     fn set_login_form_open(&self, _: bool) {}
//! #     fn alert(&self, message: &str) { eprintln!("{}", message) }
//! # }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpApi::new("http://localhost:8000")?;
//!     let controller = AppController::new(Dispatcher::new(api, Stdout, NoopScheduler));
//!
//!     // Resolve the session and draw the roster
//!     let session = controller.bootstrap().await;
//!     println!("Signed in: {}", session.is_authenticated());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod model;
pub mod notify;
pub mod page;
pub mod render;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{
    ActivityApi, ApiError, ApiResult, Credentials, Endpoint, Method, MutationOutcome,
};
#[cfg(not(target_arch = "wasm32"))]
pub use api::HttpApi;

pub use config::{Config, ConfigError, LoggingConfig};
pub use controller::{AppController, UiEvent};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use model::{Activity, ActivityCollection};
pub use notify::{
    NoopScheduler, NoticeKind, NoticeSurface, Notification, NotificationPresenter, Scheduler,
};
pub use page::{FormRef, Page};
pub use render::{render, ActivityCard, Roster};
pub use session::{Chrome, Session, SessionStore};
