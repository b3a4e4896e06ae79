//! Browser Page Surface
//!
//! Connects the engine's `Page` and `Scheduler` seams to signals and
//! `setTimeout`.

use std::time::Duration;

use campus_signup::{Chrome, FormRef, NoticeSurface, Notification, Page, Roster, Scheduler};

use super::global::GlobalState;

#[derive(Clone, Copy)]
pub struct BrowserPage {
    state: GlobalState,
}

impl BrowserPage {
    pub fn new(state: GlobalState) -> Self {
        Self { state }
    }
}

impl NoticeSurface for BrowserPage {
    fn show_notification(&self, notification: &Notification) {
        self.state.notice.set(Some(notification.clone()));
    }

    fn hide_notification(&self) {
        self.state.notice.set(None);
    }
}

impl Page for BrowserPage {
    fn apply_chrome(&self, chrome: &Chrome) {
        self.state.chrome.set(chrome.clone());
    }

    fn show_roster(&self, roster: &Roster) {
        self.state.roster.set(Some(roster.clone()));
    }

    fn set_activity_choices(&self, names: &[String]) {
        self.state.activity_choices.set(names.to_vec());
    }

    fn reset_form(&self, form: &FormRef) {
        match form {
            FormRef::Login => {
                self.state.login_username.set(String::new());
                self.state.login_password.set(String::new());
            }
            FormRef::MainSignup => {
                self.state.signup_activity.set(String::new());
                self.state.signup_email.set(String::new());
            }
            FormRef::Card(activity) => self.state.card_drafts.update(|drafts| {
                drafts.remove(activity);
            }),
        }
    }

    fn set_login_form_open(&self, open: bool) {
        self.state.login_open.set(open);
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            web_sys::console::error_1(&format!("Alert failed: {:?}", e).into());
        }
    }
}

/// Notification expiry on `setTimeout`
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}
