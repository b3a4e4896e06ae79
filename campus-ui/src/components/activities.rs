//! Activity List Component
//!
//! Draws the roster view one card at a time. Removal buttons and card
//! forms bind their own handlers, each carrying the activity it belongs to.

use leptos::*;
use std::rc::Rc;

use campus_signup::render::{LOAD_FAILED_TEXT, NO_PARTICIPANTS_TEXT};
use campus_signup::{ActivityCard, Roster, UiEvent};

use crate::state::{dispatch, Controller, GlobalState};

#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section id="activities-container">
            <h3>"Available Activities"</h3>
            <div id="activities-list">
                {move || match state.roster.get() {
                    None => view! { <p>"Loading activities..."</p> }.into_view(),
                    Some(Roster::LoadFailed) => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_view(),
                    Some(Roster::Cards(cards)) => cards
                        .into_iter()
                        .map(|card| view! { <ActivityCardView card=card /> })
                        .collect_view(),
                }}
            </div>
        </section>
    }
}

#[component]
fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let controller = use_context::<Rc<Controller>>().expect("Controller not found");
    let availability = card.availability();

    let participants = if card.has_participants() {
        let items = card
            .participants
            .iter()
            .map(|email| {
                let remove = card.can_remove.then(|| {
                    let controller = Rc::clone(&controller);
                    let event = UiEvent::Unregister {
                        activity: card.name.clone(),
                        email: email.clone(),
                    };
                    view! {
                        <button
                            class="delete-btn"
                            on:click=move |_| dispatch(&controller, event.clone())
                        >
                            "❌"
                        </button>
                    }
                });

                view! {
                    <li>
                        <span class="participant-email">{email.clone()}</span>
                        {remove}
                    </li>
                }
            })
            .collect_view();

        view! {
            <div class="participants-section">
                <h5>"Participants:"</h5>
                <ul class="participants-list">{items}</ul>
            </div>
        }
        .into_view()
    } else {
        view! { <p><em>{NO_PARTICIPANTS_TEXT}</em></p> }.into_view()
    };

    let form = card
        .show_card_form
        .then(|| view! { <CardSignupForm activity=card.name.clone() /> });

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>
            <div class="participants-container">{participants}</div>
            {form}
        </div>
    }
}

/// Staff signup form on one card. The typed email lives in global state so
/// it survives the card being redrawn by an unrelated refresh.
#[component]
fn CardSignupForm(activity: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let controller = use_context::<Rc<Controller>>().expect("Controller not found");

    let value_key = activity.clone();
    let value = move || {
        state
            .card_drafts
            .with(|drafts| drafts.get(&value_key).cloned().unwrap_or_default())
    };

    let input_key = activity.clone();
    let on_input = move |ev: ev::Event| {
        let email = event_target_value(&ev);
        state.card_drafts.update(|drafts| {
            drafts.insert(input_key.clone(), email);
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let email = state
            .card_drafts
            .with_untracked(|drafts| drafts.get(&activity).cloned().unwrap_or_default());
        dispatch(
            &controller,
            UiEvent::CardSignup {
                activity: activity.clone(),
                email,
            },
        );
    };

    view! {
        <form class="signup-form-card" on:submit=on_submit>
            <input
                type="email"
                placeholder="Student email"
                required=true
                prop:value=value
                on:input=on_input
            />
            <button type="submit">"Register"</button>
        </form>
    }
}
