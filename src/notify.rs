//! Notification Presenter
//!
//! Transient success/error feedback. At most one notification is visible;
//! a newer one replaces the old immediately and the old hide-timer becomes
//! a no-op.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Default visibility window
pub const NOTICE_WINDOW: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class applied to the message element
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NoticeKind,
}

#[cfg(test)]
impl Notification {
    pub(crate) fn success(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: NoticeKind::Success,
        }
    }

    pub(crate) fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: NoticeKind::Error,
        }
    }
}

/// Where notifications are drawn
pub trait NoticeSurface {
    fn show_notification(&self, notification: &Notification);
    fn hide_notification(&self);
}

/// Deferred execution on the host's event loop
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Scheduler for hosts whose notifications never need hiding (terminals)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScheduler;

impl Scheduler for NoopScheduler {
    fn schedule(&self, _delay: Duration, _task: Box<dyn FnOnce()>) {}
}

/// Shows one notification at a time and hides it after the window elapses
pub struct NotificationPresenter<P, S> {
    surface: P,
    scheduler: S,
    window: Duration,
    /// Bumped on every `show`; a timer only hides its own generation
    generation: Rc<Cell<u64>>,
    current: Rc<RefCell<Option<Notification>>>,
}

impl<P, S> NotificationPresenter<P, S>
where
    P: NoticeSurface + Clone + 'static,
    S: Scheduler,
{
    pub fn new(surface: P, scheduler: S) -> Self {
        Self::with_window(surface, scheduler, NOTICE_WINDOW)
    }

    pub fn with_window(surface: P, scheduler: S, window: Duration) -> Self {
        Self {
            surface,
            scheduler,
            window,
            generation: Rc::new(Cell::new(0)),
            current: Rc::new(RefCell::new(None)),
        }
    }

    pub fn show(&self, text: &str, kind: NoticeKind) {
        let notification = Notification {
            text: text.to_string(),
            kind,
        };

        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        *self.current.borrow_mut() = Some(notification.clone());
        self.surface.show_notification(&notification);

        let latest = Rc::clone(&self.generation);
        let current = Rc::clone(&self.current);
        let surface = self.surface.clone();
        self.scheduler.schedule(
            self.window,
            Box::new(move || {
                if latest.get() == generation {
                    current.borrow_mut().take();
                    surface.hide_notification();
                }
            }),
        );
    }

    pub fn success(&self, text: &str) {
        self.show(text, NoticeKind::Success);
    }

    pub fn error(&self, text: &str) {
        self.show(text, NoticeKind::Error);
    }

    /// The notification currently visible, if any
    #[cfg(test)]
    pub(crate) fn current(&self) -> Option<Notification> {
        self.current.borrow().clone()
    }

    #[cfg(test)]
    pub(crate) fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, PageEffect, RecordingPage};

    #[test]
    fn test_show_then_hide_after_window() {
        let page = RecordingPage::new();
        let scheduler = ManualScheduler::new();
        let presenter = NotificationPresenter::new(page.clone(), scheduler.clone());

        presenter.success("Signed up");
        assert_eq!(page.notification(), Some(Notification::success("Signed up")));
        assert_eq!(scheduler.pending_delays(), vec![NOTICE_WINDOW]);

        scheduler.fire_all();
        assert_eq!(page.notification(), None);
        assert_eq!(presenter.current(), None);
    }

    #[test]
    fn test_second_notice_survives_first_timer() {
        let page = RecordingPage::new();
        let scheduler = ManualScheduler::new();
        let presenter = NotificationPresenter::new(page.clone(), scheduler.clone());

        presenter.success("first");
        presenter.error("second");
        assert_eq!(page.notification(), Some(Notification::error("second")));

        // First timer fires: must not clear the second notice
        scheduler.fire_next();
        assert_eq!(page.notification(), Some(Notification::error("second")));
        assert_eq!(presenter.current(), Some(Notification::error("second")));

        scheduler.fire_next();
        assert_eq!(page.notification(), None);

        let hides = page
            .effects()
            .into_iter()
            .filter(|e| matches!(e, PageEffect::HideNotification))
            .count();
        assert_eq!(hides, 1);
    }

    #[test]
    fn test_custom_window() {
        let scheduler = ManualScheduler::new();
        let presenter = NotificationPresenter::with_window(
            RecordingPage::new(),
            scheduler.clone(),
            Duration::from_millis(250),
        );
        presenter.error("boom");
        assert_eq!(scheduler.pending_delays(), vec![Duration::from_millis(250)]);
        assert_eq!(presenter.window(), Duration::from_millis(250));
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(NoticeKind::Success.css_class(), "success");
        assert_eq!(NoticeKind::Error.css_class(), "error");
    }
}
