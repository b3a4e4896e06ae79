//! Session Store
//!
//! Holds the client's belief about who is logged in for the lifetime of the
//! page. Nothing here is persisted; the server's own session cookie is the
//! only thing that survives a reload.

use std::cell::RefCell;

/// Authentication state of the current visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { username: String },
}

impl Session {
    pub fn authenticated(username: &str) -> Self {
        Session::Authenticated {
            username: username.to_string(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated { username } => Some(username),
            Session::Anonymous => None,
        }
    }
}

/// Owner of the current [`Session`].
///
/// Other components read through [`SessionStore::get`]; only the dispatcher
/// and controller call [`SessionStore::set`]. No validation happens here.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: RefCell<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Session {
        self.current.borrow().clone()
    }

    pub fn set(&self, session: Session) {
        match &session {
            Session::Authenticated { username } => {
                tracing::info!(user = %username, "Session authenticated")
            }
            Session::Anonymous => tracing::info!("Session anonymous"),
        }
        *self.current.borrow_mut() = session;
    }
}

/// Page chrome visibility, derived entirely from the session.
///
/// Recomputed on every session transition so the header never shows a
/// stale login/logout state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub user_section_visible: bool,
    /// Uppercased first character of the username
    pub avatar: Option<String>,
    pub login_button_visible: bool,
    pub logout_button_visible: bool,
    /// The always-available top-level signup form
    pub main_signup_visible: bool,
}

impl Chrome {
    pub fn for_session(session: &Session) -> Self {
        match session {
            Session::Authenticated { username } => Self {
                user_section_visible: true,
                avatar: Some(avatar_initial(username)),
                login_button_visible: false,
                logout_button_visible: true,
                main_signup_visible: false,
            },
            Session::Anonymous => Self {
                user_section_visible: false,
                avatar: None,
                login_button_visible: true,
                logout_button_visible: false,
                main_signup_visible: true,
            },
        }
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::for_session(&Session::Anonymous)
    }
}

fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
