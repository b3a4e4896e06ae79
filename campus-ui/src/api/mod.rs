//! Browser Transport
//!
//! gloo-net implementation of the engine's backend contract.

pub mod client;

pub use client::{get_api_base, GlooApi};
