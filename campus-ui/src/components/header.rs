//! Header Component
//!
//! Title bar with the staff user section and the login/logout buttons.

use leptos::*;
use std::rc::Rc;

use campus_signup::UiEvent;

use crate::state::global::display;
use crate::state::{dispatch, Controller, GlobalState};

#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let controller = use_context::<Rc<Controller>>().expect("Controller not found");
    let on_logout = controller.clone();

    view! {
        <header>
            <h1>"Extracurricular Activities"</h1>

            <div id="user-controls">
                <div
                    id="user-section"
                    style:display=move || display(state.chrome.get().user_section_visible, "flex")
                >
                    <span id="user-avatar" class="avatar">
                        {move || state.chrome.get().avatar.unwrap_or_default()}
                    </span>
                </div>

                <button
                    id="login-btn"
                    style:display=move || display(state.chrome.get().login_button_visible, "block")
                    on:click=move |_| dispatch(&controller, UiEvent::ToggleLoginForm)
                >
                    "Staff Login"
                </button>
                <button
                    id="logout-btn"
                    style:display=move || display(state.chrome.get().logout_button_visible, "block")
                    on:click=move |_| dispatch(&on_logout, UiEvent::Logout)
                >
                    "Logout"
                </button>
            </div>
        </header>
    }
}
