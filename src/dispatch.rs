//! Mutation Dispatcher
//!
//! Issues signup/unregister/login/logout requests and applies the response
//! policy: feedback first, then a full roster refetch on success. The roster
//! is never patched locally; the server's next snapshot is the only source
//! of truth.

use std::time::Duration;

use crate::api::{ActivityApi, ApiResult, Credentials, MutationOutcome};
use crate::notify::{NotificationPresenter, Scheduler, NOTICE_WINDOW};
use crate::page::{FormRef, Page};
use crate::render::{self, Roster};
use crate::session::{Chrome, Session, SessionStore};

pub const GENERIC_ERROR: &str = "An error occurred";
pub const SUCCESS_FALLBACK: &str = "Request completed";
pub const SIGNUP_UNREACHABLE: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_UNREACHABLE: &str = "Failed to unregister. Please try again.";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_UNREACHABLE: &str = "An error occurred during login.";

/// What happened to a dispatched operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Server accepted; feedback shown and roster refreshed
    Applied,
    /// Server answered with a non-2xx
    Rejected,
    /// The request did not complete
    Unreachable,
}

impl DispatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, DispatchOutcome::Applied)
    }
}

pub struct Dispatcher<A, P, S> {
    api: A,
    page: P,
    session: SessionStore,
    notices: NotificationPresenter<P, S>,
}

impl<A, P, S> Dispatcher<A, P, S>
where
    A: ActivityApi,
    P: Page + Clone + 'static,
    S: Scheduler,
{
    pub fn new(api: A, page: P, scheduler: S) -> Self {
        Self::with_notice_window(api, page, scheduler, NOTICE_WINDOW)
    }

    pub fn with_notice_window(api: A, page: P, scheduler: S, window: Duration) -> Self {
        let notices = NotificationPresenter::with_window(page.clone(), scheduler, window);
        Self {
            api,
            page,
            session: SessionStore::new(),
            notices,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Record a session transition and redraw the chrome for it
    pub fn establish(&self, session: Session) {
        let chrome = Chrome::for_session(&session);
        self.session.set(session);
        self.page.apply_chrome(&chrome);
    }

    /// Fetch the full roster and redraw it for the current session.
    ///
    /// Any fetch or decode failure replaces the roster with the failure
    /// placeholder. Returns whether a fresh roster was drawn.
    pub async fn refresh(&self) -> bool {
        match self.api.list_activities().await {
            Ok(activities) => {
                let roster = render::render(&activities, &self.session.get());
                self.page.set_activity_choices(&activities.names());
                self.page.show_roster(&roster);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load activities");
                self.page.show_roster(&Roster::LoadFailed);
                false
            }
        }
    }

    /// Register `email` for `activity`; `form` is reset on success
    pub async fn signup(&self, form: FormRef, activity: &str, email: &str) -> DispatchOutcome {
        tracing::debug!(%activity, "Dispatching signup");
        let result = self.api.signup(activity, email).await;
        self.conclude(result, Some(form), SIGNUP_UNREACHABLE).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> DispatchOutcome {
        tracing::debug!(%activity, "Dispatching unregister");
        let result = self.api.unregister(activity, email).await;
        self.conclude(result, None, UNREGISTER_UNREACHABLE).await
    }

    /// Log in. Failures raise a blocking alert instead of a notification.
    pub async fn login(&self, username: &str, password: &str) -> DispatchOutcome {
        let credentials = Credentials::new(username, password);

        match self.api.login(&credentials).await {
            Ok(MutationOutcome::Accepted { .. }) => {
                self.establish(Session::authenticated(username));
                self.page.reset_form(&FormRef::Login);
                self.refresh().await;
                DispatchOutcome::Applied
            }
            Ok(MutationOutcome::Rejected { status, detail }) => {
                tracing::info!(status, "Login rejected");
                self.page.alert(detail.as_deref().unwrap_or(LOGIN_FAILED));
                self.drop_session().await;
                DispatchOutcome::Rejected
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login request failed");
                self.page.alert(LOGIN_UNREACHABLE);
                self.drop_session().await;
                DispatchOutcome::Unreachable
            }
        }
    }

    /// A failed login leaves no one logged in. Only a session that was
    /// actually authenticated needs its affordances redrawn.
    async fn drop_session(&self) {
        if self.session.get().is_authenticated() {
            self.establish(Session::Anonymous);
            self.refresh().await;
        }
    }

    /// Best-effort logout: the client ends up anonymous whatever the server says
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            tracing::warn!(error = %e, "Logout request failed");
        }
        self.establish(Session::Anonymous);
        self.refresh().await;
    }

    async fn conclude(
        &self,
        result: ApiResult<MutationOutcome>,
        form: Option<FormRef>,
        unreachable: &str,
    ) -> DispatchOutcome {
        match result {
            Ok(MutationOutcome::Accepted { message }) => {
                self.notices
                    .success(message.as_deref().unwrap_or(SUCCESS_FALLBACK));
                if let Some(form) = form {
                    self.page.reset_form(&form);
                }
                self.refresh().await;
                DispatchOutcome::Applied
            }
            Ok(MutationOutcome::Rejected { status, detail }) => {
                tracing::info!(status, "Mutation rejected");
                self.notices.error(detail.as_deref().unwrap_or(GENERIC_ERROR));
                DispatchOutcome::Rejected
            }
            Err(e) => {
                tracing::warn!(error = %e, "Mutation request failed");
                self.notices.error(unreachable);
                DispatchOutcome::Unreachable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::notify::{NoticeKind, Notification};
    use crate::testing::{Call, FakeApi, ManualScheduler, PageEffect, RecordingPage};

    type TestDispatcher = Dispatcher<FakeApi, RecordingPage, ManualScheduler>;

    fn dispatcher() -> (TestDispatcher, FakeApi, RecordingPage) {
        let api = FakeApi::new();
        let page = RecordingPage::new();
        let dispatcher = Dispatcher::new(api.clone(), page.clone(), ManualScheduler::new());
        (dispatcher, api, page)
    }

    #[tokio::test]
    async fn test_signup_success_notifies_resets_and_refetches_once() {
        let (dispatcher, api, page) = dispatcher();
        api.accept("Signed up X for Y");

        let outcome = dispatcher
            .signup(FormRef::Card("Y".to_string()), "Y", "X")
            .await;

        assert_eq!(outcome, DispatchOutcome::Applied);
        let notice = page.notification().unwrap();
        assert_eq!(notice.text, "Signed up X for Y");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(page.resets(), vec![FormRef::Card("Y".to_string())]);
        assert_eq!(api.count(&Call::ListActivities), 1);
        assert!(page.roster().is_some());
    }

    #[tokio::test]
    async fn test_signup_success_without_message_uses_fallback() {
        let (dispatcher, api, page) = dispatcher();
        api.push_mutation(Ok(MutationOutcome::Accepted { message: None }));

        dispatcher.signup(FormRef::MainSignup, "Chess Club", "a@b.edu").await;
        assert_eq!(page.notification(), Some(Notification::success(SUCCESS_FALLBACK)));
    }

    #[tokio::test]
    async fn test_unregister_rejection_shows_detail_without_refetch() {
        let (dispatcher, api, page) = dispatcher();
        api.reject(404, Some("Not registered"));

        let outcome = dispatcher.unregister("Chess Club", "ghost@mergington.edu").await;

        assert_eq!(outcome, DispatchOutcome::Rejected);
        let notice = page.notification().unwrap();
        assert_eq!(notice.text, "Not registered");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(api.count(&Call::ListActivities), 0);
        assert!(page.roster().is_none());
    }

    #[tokio::test]
    async fn test_rejection_without_detail_uses_generic_text() {
        let (dispatcher, api, page) = dispatcher();
        api.reject(500, None);

        dispatcher.signup(FormRef::MainSignup, "Chess Club", "a@b.edu").await;
        assert_eq!(page.notification(), Some(Notification::error(GENERIC_ERROR)));
        assert!(page.resets().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failures_use_operation_specific_text() {
        let (dispatcher, api, page) = dispatcher();

        api.unreachable();
        let outcome = dispatcher.signup(FormRef::MainSignup, "Chess Club", "a@b.edu").await;
        assert_eq!(outcome, DispatchOutcome::Unreachable);
        assert_eq!(page.notification(), Some(Notification::error(SIGNUP_UNREACHABLE)));

        api.unreachable();
        dispatcher.unregister("Chess Club", "a@b.edu").await;
        assert_eq!(
            page.notification(),
            Some(Notification::error(UNREGISTER_UNREACHABLE))
        );

        assert_eq!(api.count(&Call::ListActivities), 0);
    }

    #[tokio::test]
    async fn test_decode_error_on_success_counts_as_unreachable() {
        let (dispatcher, api, page) = dispatcher();
        api.push_mutation(Err(ApiError::Decode("expected value".to_string())));

        let outcome = dispatcher.unregister("Chess Club", "a@b.edu").await;
        assert_eq!(outcome, DispatchOutcome::Unreachable);
        assert_eq!(
            page.notification(),
            Some(Notification::error(UNREGISTER_UNREACHABLE))
        );
    }

    #[tokio::test]
    async fn test_login_success_authenticates_and_redraws_with_affordances() {
        let (dispatcher, api, page) = dispatcher();
        api.accept("Login successful");

        let outcome = dispatcher.login("mchen", "secret").await;

        assert_eq!(outcome, DispatchOutcome::Applied);
        assert_eq!(dispatcher.session(), Session::authenticated("mchen"));
        assert_eq!(
            page.chrome(),
            Some(Chrome::for_session(&Session::authenticated("mchen")))
        );
        assert_eq!(page.resets(), vec![FormRef::Login]);
        assert!(page.roster().unwrap().removal_buttons() > 0);
        assert!(page.alerts().is_empty());
        // Login feedback never goes through the notification channel
        assert_eq!(page.notification(), None);
    }

    #[tokio::test]
    async fn test_login_rejection_alerts_with_detail() {
        let (dispatcher, api, page) = dispatcher();
        api.reject(401, Some("Invalid credentials"));

        let outcome = dispatcher.login("mchen", "wrong").await;

        assert_eq!(outcome, DispatchOutcome::Rejected);
        assert_eq!(page.alerts(), vec!["Invalid credentials"]);
        assert_eq!(dispatcher.session(), Session::Anonymous);
        assert_eq!(page.notification(), None);
        assert_eq!(api.count(&Call::ListActivities), 0);
    }

    #[tokio::test]
    async fn test_failed_login_drops_existing_session() {
        let (dispatcher, api, page) = dispatcher();
        dispatcher.establish(Session::authenticated("mchen"));
        api.reject(401, Some("Invalid credentials"));

        let outcome = dispatcher.login("principal", "wrong").await;

        assert_eq!(outcome, DispatchOutcome::Rejected);
        assert_eq!(dispatcher.session(), Session::Anonymous);
        assert_eq!(page.chrome(), Some(Chrome::default()));
        assert_eq!(api.count(&Call::ListActivities), 1);
        assert_eq!(page.roster().unwrap().removal_buttons(), 0);
    }

    #[tokio::test]
    async fn test_login_fallback_texts() {
        let (dispatcher, api, page) = dispatcher();
        api.reject(400, None);
        api.unreachable();

        dispatcher.login("mchen", "x").await;
        dispatcher.login("mchen", "x").await;
        assert_eq!(page.alerts(), vec![LOGIN_FAILED, LOGIN_UNREACHABLE]);
    }

    #[tokio::test]
    async fn test_logout_is_anonymous_even_when_server_fails() {
        let (dispatcher, api, page) = dispatcher();
        dispatcher.establish(Session::authenticated("mchen"));
        api.set_logout(Err(ApiError::Transport("connection reset".to_string())));

        dispatcher.logout().await;

        assert_eq!(dispatcher.session(), Session::Anonymous);
        assert_eq!(page.chrome(), Some(Chrome::default()));
        assert_eq!(api.calls(), vec![Call::Logout, Call::ListActivities]);
        assert_eq!(page.roster().unwrap().removal_buttons(), 0);
    }

    #[tokio::test]
    async fn test_refresh_failure_shows_placeholder() {
        let (dispatcher, api, page) = dispatcher();
        api.set_roster(Err(ApiError::Decode("missing field `participants`".to_string())));

        assert!(!dispatcher.refresh().await);
        assert_eq!(page.roster(), Some(Roster::LoadFailed));
    }

    #[tokio::test]
    async fn test_refresh_publishes_activity_choices() {
        let (dispatcher, _api, page) = dispatcher();
        assert!(dispatcher.refresh().await);
        assert!(page.effects().contains(&PageEffect::Choices(vec![
            "Chess Club".to_string(),
            "Art Studio".to_string()
        ])));
    }
}
