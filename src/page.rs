//! Page Surface
//!
//! The DOM as seen by the engine. Implemented by the Leptos front-end with
//! signals, by the terminal client with stdout, and by tests with a recorder.

use crate::notify::NoticeSurface;
use crate::render::Roster;
use crate::session::Chrome;

/// Identifies a form the engine may reset after a successful action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormRef {
    Login,
    /// The top-level signup form visible to anonymous visitors
    MainSignup,
    /// The signup form on one activity card
    Card(String),
}

pub trait Page: NoticeSurface {
    /// Toggle header elements for the current session
    fn apply_chrome(&self, chrome: &Chrome);

    /// Replace the roster container's contents
    fn show_roster(&self, roster: &Roster);

    /// Activity names offered by the main signup form
    fn set_activity_choices(&self, names: &[String]);

    fn reset_form(&self, form: &FormRef);

    fn set_login_form_open(&self, open: bool);

    /// Blocking acknowledgment (login failures)
    fn alert(&self, message: &str);
}
