//! Lead Tracker browser app
//!
//! Leptos CSR front-end over the shared `lib-core` views. Each page keeps its view
//! model in an `RwSignal`; user actions produce commands that run on
//! `spawn_local` against the gloo-net API client.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Lead Tracker starting (API at {})", utils::constants::API_BASE);

    leptos::mount::mount_to_body(|| view! { <App/> });
}
