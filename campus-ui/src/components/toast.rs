//! Toast Notification Component
//!
//! The single message slot. The engine decides what shows and when it
//! clears; this only draws the current notification.

use leptos::*;

use campus_signup::{NoticeKind, Notification};

use crate::state::global::GlobalState;

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || match state.notice.get() {
            Some(notice) => view! { <ToastMessage notice=notice /> }.into_view(),
            None => view! { <div id="message" class="hidden" /> }.into_view(),
        }}
    }
}

#[component]
fn ToastMessage(notice: Notification) -> impl IntoView {
    let icon = match notice.kind {
        NoticeKind::Success => "✓",
        NoticeKind::Error => "✕",
    };

    view! {
        <div id="message" class=format!("message {}", notice.kind.css_class())>
            <span class="icon">{icon}</span>
            <span class="text">{notice.text}</span>
        </div>
    }
}
