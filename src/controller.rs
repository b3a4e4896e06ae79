//! App Controller
//!
//! Owns bootstrap and maps DOM events onto dispatcher operations. Hosts
//! register their DOM handlers once at startup and translate each event
//! into a [`UiEvent`] for [`AppController::handle`].

use std::cell::Cell;

use crate::api::ActivityApi;
use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::notify::Scheduler;
use crate::page::{FormRef, Page};
use crate::session::Session;

/// A user action, already lifted out of the DOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Submit on an activity card's form
    CardSignup { activity: String, email: String },
    /// Submit on the top-level signup form
    MainSignup { activity: String, email: String },
    /// Click on a participant's removal button
    Unregister { activity: String, email: String },
    Login { username: String, password: String },
    Logout,
    /// Login button: show or hide the login form
    ToggleLoginForm,
}

pub struct AppController<A, P, S> {
    dispatcher: Dispatcher<A, P, S>,
    login_form_open: Cell<bool>,
}

impl<A, P, S> AppController<A, P, S>
where
    A: ActivityApi,
    P: Page + Clone + 'static,
    S: Scheduler,
{
    pub fn new(dispatcher: Dispatcher<A, P, S>) -> Self {
        Self {
            dispatcher,
            login_form_open: Cell::new(false),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<A, P, S> {
        &self.dispatcher
    }

    #[cfg(test)]
    pub(crate) fn login_form_open(&self) -> bool {
        self.login_form_open.get()
    }

    /// Resolve the session, draw the matching chrome, then fetch and draw
    /// the roster. A failed session check falls back to anonymous so the
    /// activities always show.
    ///
    /// A login form the visitor opened during the check stays open unless
    /// the check found someone already logged in.
    pub async fn bootstrap(&self) -> Session {
        let session = match self.dispatcher.api().current_user().await {
            Ok(Some(username)) => Session::Authenticated { username },
            Ok(None) => Session::Anonymous,
            Err(e) => {
                tracing::warn!(error = %e, "Session check failed, continuing anonymously");
                Session::Anonymous
            }
        };

        self.dispatcher.establish(session.clone());
        if session.is_authenticated() && self.login_form_open.get() {
            self.set_login_form_open(false);
        }
        self.dispatcher.refresh().await;
        session
    }

    /// Run the command for one event.
    ///
    /// Returns `None` for purely local events that issue no request.
    pub async fn handle(&self, event: UiEvent) -> Option<DispatchOutcome> {
        match event {
            UiEvent::CardSignup { activity, email } => {
                let form = FormRef::Card(activity.clone());
                Some(self.dispatcher.signup(form, &activity, &email).await)
            }
            UiEvent::MainSignup { activity, email } => Some(
                self.dispatcher
                    .signup(FormRef::MainSignup, &activity, &email)
                    .await,
            ),
            UiEvent::Unregister { activity, email } => {
                Some(self.dispatcher.unregister(&activity, &email).await)
            }
            UiEvent::Login { username, password } => {
                let outcome = self.dispatcher.login(&username, &password).await;
                if outcome.is_applied() {
                    self.set_login_form_open(false);
                }
                Some(outcome)
            }
            UiEvent::Logout => {
                self.dispatcher.logout().await;
                Some(DispatchOutcome::Applied)
            }
            UiEvent::ToggleLoginForm => {
                self.set_login_form_open(!self.login_form_open.get());
                None
            }
        }
    }

    fn set_login_form_open(&self, open: bool) {
        self.login_form_open.set(open);
        self.dispatcher.page().set_login_form_open(open);
    }
}
