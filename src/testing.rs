//! Test doubles for the engine's seams.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::api::{ActivityApi, ApiError, ApiResult, Credentials, MutationOutcome};
use crate::model::{Activity, ActivityCollection};
use crate::notify::{NoticeSurface, Notification, Scheduler};
use crate::page::{FormRef, Page};
use crate::render::Roster;
use crate::session::Chrome;

pub fn sample_activities() -> ActivityCollection {
    ActivityCollection::new()
        .with(
            "Chess Club",
            Activity::new("Learn strategies", "Fridays, 3:30 PM", 12)
                .participant("michael@mergington.edu"),
        )
        .with("Art Studio", Activity::new("Painting", "Mondays", 15))
}

/// Request log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListActivities,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
    Login { username: String },
    Logout,
    CurrentUser,
}

#[derive(Default)]
struct FakeState {
    roster: RefCell<Option<ApiResult<ActivityCollection>>>,
    mutations: RefCell<VecDeque<ApiResult<MutationOutcome>>>,
    user: RefCell<Option<ApiResult<Option<String>>>>,
    logout: RefCell<Option<ApiResult<()>>>,
    calls: RefCell<Vec<Call>>,
}

/// Scripted backend. Clones share state so tests can inspect calls.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Rc<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.set_roster(Ok(sample_activities()));
        api
    }

    pub fn set_roster(&self, roster: ApiResult<ActivityCollection>) {
        *self.state.roster.borrow_mut() = Some(roster);
    }

    pub fn set_user(&self, user: ApiResult<Option<String>>) {
        *self.state.user.borrow_mut() = Some(user);
    }

    pub fn set_logout(&self, reply: ApiResult<()>) {
        *self.state.logout.borrow_mut() = Some(reply);
    }

    /// Queue the reply for the next signup/unregister/login
    pub fn push_mutation(&self, reply: ApiResult<MutationOutcome>) {
        self.state.mutations.borrow_mut().push_back(reply);
    }

    pub fn accept(&self, message: &str) {
        self.push_mutation(Ok(MutationOutcome::Accepted {
            message: Some(message.to_string()),
        }));
    }

    pub fn reject(&self, status: u16, detail: Option<&str>) {
        self.push_mutation(Ok(MutationOutcome::Rejected {
            status,
            detail: detail.map(str::to_string),
        }));
    }

    pub fn unreachable(&self) {
        self.push_mutation(Err(ApiError::Transport("connection refused".to_string())));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.calls.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.state.calls.borrow().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: Call) {
        self.state.calls.borrow_mut().push(call);
    }

    fn next_mutation(&self) -> ApiResult<MutationOutcome> {
        self.state
            .mutations
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_string())))
    }
}

#[async_trait(?Send)]
impl ActivityApi for FakeApi {
    async fn list_activities(&self) -> ApiResult<ActivityCollection> {
        self.record(Call::ListActivities);
        self.state
            .roster
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(ActivityCollection::new()))
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<MutationOutcome> {
        self.record(Call::Signup {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        self.next_mutation()
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<MutationOutcome> {
        self.record(Call::Unregister {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        self.next_mutation()
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<MutationOutcome> {
        self.record(Call::Login {
            username: credentials.username.clone(),
        });
        self.next_mutation()
    }

    async fn logout(&self) -> ApiResult<()> {
        self.record(Call::Logout);
        self.state.logout.borrow().clone().unwrap_or(Ok(()))
    }

    async fn current_user(&self) -> ApiResult<Option<String>> {
        self.record(Call::CurrentUser);
        self.state.user.borrow().clone().unwrap_or(Ok(None))
    }
}

/// Everything the engine did to the page, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    Chrome(Chrome),
    Roster(Roster),
    Choices(Vec<String>),
    ResetForm(FormRef),
    LoginFormOpen(bool),
    Alert(String),
    ShowNotification(Notification),
    HideNotification,
}

#[derive(Default)]
struct PageState {
    effects: Vec<PageEffect>,
    chrome: Option<Chrome>,
    roster: Option<Roster>,
    notification: Option<Notification>,
    login_open: bool,
}

#[derive(Clone, Default)]
pub struct RecordingPage {
    state: Rc<RefCell<PageState>>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> Vec<PageEffect> {
        self.state.borrow().effects.clone()
    }

    pub fn chrome(&self) -> Option<Chrome> {
        self.state.borrow().chrome.clone()
    }

    pub fn roster(&self) -> Option<Roster> {
        self.state.borrow().roster.clone()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.state.borrow().notification.clone()
    }

    pub fn login_open(&self) -> bool {
        self.state.borrow().login_open
    }

    pub fn alerts(&self) -> Vec<String> {
        self.effects()
            .into_iter()
            .filter_map(|e| match e {
                PageEffect::Alert(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn resets(&self) -> Vec<FormRef> {
        self.effects()
            .into_iter()
            .filter_map(|e| match e {
                PageEffect::ResetForm(form) => Some(form),
                _ => None,
            })
            .collect()
    }

    fn push(&self, effect: PageEffect) {
        self.state.borrow_mut().effects.push(effect);
    }
}

impl NoticeSurface for RecordingPage {
    fn show_notification(&self, notification: &Notification) {
        self.state.borrow_mut().notification = Some(notification.clone());
        self.push(PageEffect::ShowNotification(notification.clone()));
    }

    fn hide_notification(&self) {
        self.state.borrow_mut().notification = None;
        self.push(PageEffect::HideNotification);
    }
}

impl Page for RecordingPage {
    fn apply_chrome(&self, chrome: &Chrome) {
        self.state.borrow_mut().chrome = Some(chrome.clone());
        self.push(PageEffect::Chrome(chrome.clone()));
    }

    fn show_roster(&self, roster: &Roster) {
        self.state.borrow_mut().roster = Some(roster.clone());
        self.push(PageEffect::Roster(roster.clone()));
    }

    fn set_activity_choices(&self, names: &[String]) {
        self.push(PageEffect::Choices(names.to_vec()));
    }

    fn reset_form(&self, form: &FormRef) {
        self.push(PageEffect::ResetForm(form.clone()));
    }

    fn set_login_form_open(&self, open: bool) {
        self.state.borrow_mut().login_open = open;
        self.push(PageEffect::LoginFormOpen(open));
    }

    fn alert(&self, message: &str) {
        self.push(PageEffect::Alert(message.to_string()));
    }
}

type Task = Box<dyn FnOnce()>;

/// Holds hide-timers until the test fires them
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pending: Rc<RefCell<VecDeque<(Duration, Task)>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_delays(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(d, _)| *d).collect()
    }

    /// Run the oldest pending task. Returns false when none are pending.
    pub fn fire_next(&self) -> bool {
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some((_, task)) => {
                task();
                true
            }
            None => false,
        }
    }

    pub fn fire_all(&self) {
        while self.fire_next() {}
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push_back((delay, task));
    }
}
