//! Login page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lib_core::views::LoginView;

use crate::components::Banner;
use crate::services::api::use_api;
use crate::services::dispatch::act;
use crate::state::auth::use_auth_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();
    let api = use_api();
    let navigate = use_navigate();
    let login = RwSignal::new(LoginView::new(auth.session()));

    // The view stores the token itself; follow its redirect once it asks for one.
    Effect::new(move |_| {
        login.track();
        if let Some(route) = login.try_update_untracked(|v| v.take_redirect()).flatten() {
            log::info!("Login succeeded, navigating to {}", route.path());
            auth.sync();
            navigate(route.path(), Default::default());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        act(api.clone(), login, LoginView::submit);
    };

    let error = Signal::derive(move || login.with(|v| v.error().map(str::to_string)));

    view! {
        <form class="card login-card" on:submit=on_submit>
            <h1>"Sign in"</h1>
            <Banner message=Signal::derive(|| None) error=error/>

            <label>
                "Email"
                <input
                    type="email"
                    autocomplete="username"
                    prop:value=move || login.with(|v| v.email.clone())
                    on:input=move |ev| login.update(|v| v.email = event_target_value(&ev))
                />
            </label>

            <label>
                "Password"
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || login.with(|v| v.password.clone())
                    on:input=move |ev| login.update(|v| v.password = event_target_value(&ev))
                />
            </label>

            <button type="submit" disabled=move || login.with(|v| v.is_loading())>
                {move || if login.with(|v| v.is_loading()) { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
