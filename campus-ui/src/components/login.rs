//! Login Form Component

use leptos::*;
use std::rc::Rc;

use campus_signup::UiEvent;

use crate::state::global::display;
use crate::state::{dispatch, Controller, GlobalState};

/// Staff login form, shown by the header's login button
#[component]
pub fn LoginForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let controller = use_context::<Rc<Controller>>().expect("Controller not found");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(
            &controller,
            UiEvent::Login {
                username: state.login_username.get_untracked(),
                password: state.login_password.get_untracked(),
            },
        );
    };

    view! {
        <section
            id="login-container"
            style:display=move || display(state.login_open.get(), "block")
        >
            <h3>"Staff Login"</h3>
            <form id="login-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="username">"Username:"</label>
                    <input
                        type="text"
                        id="username"
                        required=true
                        prop:value=move || state.login_username.get()
                        on:input=move |ev| state.login_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password:"</label>
                    <input
                        type="password"
                        id="password"
                        required=true
                        prop:value=move || state.login_password.get()
                        on:input=move |ev| state.login_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit">"Login"</button>
            </form>
        </section>
    }
}
