//! Signup Form Component
//!
//! The top-level form for anonymous visitors. Its activity choices track
//! the latest roster snapshot.

use leptos::*;
use std::rc::Rc;

use campus_signup::UiEvent;

use crate::state::global::display;
use crate::state::{dispatch, Controller, GlobalState};

#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let controller = use_context::<Rc<Controller>>().expect("Controller not found");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(
            &controller,
            UiEvent::MainSignup {
                activity: state.signup_activity.get_untracked(),
                email: state.signup_email.get_untracked(),
            },
        );
    };

    view! {
        <section
            id="signup-container"
            style:display=move || display(state.chrome.get().main_signup_visible, "block")
        >
            <h3>"Sign Up for an Activity"</h3>
            <form id="signup-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Student Email:"</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        placeholder="Student email"
                        prop:value=move || state.signup_email.get()
                        on:input=move |ev| state.signup_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="activity">"Select Activity:"</label>
                    <select
                        id="activity"
                        required=true
                        prop:value=move || state.signup_activity.get()
                        on:change=move |ev| state.signup_activity.set(event_target_value(&ev))
                    >
                        <option value="">"-- Select an activity --"</option>
                        <For
                            each=move || state.activity_choices.get()
                            key=|name| name.clone()
                            children=|name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            }
                        />
                    </select>
                </div>
                <button type="submit">"Sign Up"</button>
            </form>
        </section>
    }
}
