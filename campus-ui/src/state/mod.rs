//! State Management
//!
//! Page signals, the engine's page surface over them, and the controller
//! wiring shared by every component.

pub mod global;
pub mod page;

pub use global::{provide_global_state, GlobalState};
pub use page::{BrowserPage, BrowserScheduler};

use leptos::*;
use std::rc::Rc;

use campus_signup::{AppController, UiEvent};

use crate::api::GlooApi;

/// The engine instantiated for the browser
pub type Controller = AppController<GlooApi, BrowserPage, BrowserScheduler>;

/// Run the command for a DOM event on the page's event loop
pub fn dispatch(controller: &Rc<Controller>, event: UiEvent) {
    let controller = Rc::clone(controller);
    spawn_local(async move {
        controller.handle(event).await;
    });
}
