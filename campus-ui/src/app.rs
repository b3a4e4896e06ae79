//! App Root Component
//!
//! Builds the engine over the browser surface, provides it to every
//! component and runs bootstrap once on load.

use leptos::*;
use std::rc::Rc;

use campus_signup::{AppController, Dispatcher};

use crate::api::{get_api_base, GlooApi};
use crate::components::{ActivityList, Header, LoginForm, SignupForm, Toast};
use crate::state::{provide_global_state, BrowserPage, BrowserScheduler};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();

    let api = GlooApi::new(get_api_base());
    let dispatcher = Dispatcher::new(api, BrowserPage::new(state), BrowserScheduler);
    let controller = Rc::new(AppController::new(dispatcher));
    provide_context(Rc::clone(&controller));

    spawn_local(async move {
        controller.bootstrap().await;
    });

    view! {
        <Header />
        <main>
            <LoginForm />
            <ActivityList />
            <SignupForm />
            <Toast />
        </main>
    }
}
