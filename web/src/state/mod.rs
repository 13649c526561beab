//! Application state shared through Leptos context

pub mod auth;
