//! Campus Signup Page
//!
//! Activity roster and staff tools built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. The roster,
//! session and mutation policy live in the `campus-signup` engine; this
//! crate supplies the browser pieces: a gloo-net transport, gloo-timers for
//! notification expiry, and a signal-backed page surface.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
