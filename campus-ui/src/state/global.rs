//! Global Application State
//!
//! Reactive state management using Leptos signals. The engine writes these
//! through [`super::BrowserPage`]; components only read them, apart from
//! the form fields they are bound to.

use leptos::*;
use std::collections::HashMap;

use campus_signup::{Chrome, Notification, Roster};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Header visibility for the current session
    pub chrome: RwSignal<Chrome>,
    /// Latest roster view; `None` until the first fetch completes
    pub roster: RwSignal<Option<Roster>>,
    /// Email typed into each card's signup form, by activity name
    pub card_drafts: RwSignal<HashMap<String, String>>,
    /// Activity names offered by the main signup form
    pub activity_choices: RwSignal<Vec<String>>,
    /// Login form visibility
    pub login_open: RwSignal<bool>,
    /// Visible notification, if any
    pub notice: RwSignal<Option<Notification>>,
    pub login_username: RwSignal<String>,
    pub login_password: RwSignal<String>,
    pub signup_activity: RwSignal<String>,
    pub signup_email: RwSignal<String>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        chrome: create_rw_signal(Chrome::default()),
        roster: create_rw_signal(None),
        card_drafts: create_rw_signal(HashMap::new()),
        activity_choices: create_rw_signal(Vec::new()),
        login_open: create_rw_signal(false),
        notice: create_rw_signal(None),
        login_username: create_rw_signal(String::new()),
        login_password: create_rw_signal(String::new()),
        signup_activity: create_rw_signal(String::new()),
        signup_email: create_rw_signal(String::new()),
    };

    provide_context(state);
    state
}

/// `display` value for a visibility flag
pub fn display(visible: bool, shown_as: &'static str) -> &'static str {
    if visible {
        shown_as
    } else {
        "none"
    }
}
