//! Success and error banners

use leptos::prelude::*;

#[component]
pub fn Banner(message: Signal<Option<String>>, error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|m| view! { <div class="banner success">{m}</div> })}
        {move || error.get().map(|e| view! { <div class="banner error">{e}</div> })}
    }
}
