//! Navigation bar

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use lib_core::{nav_links, Route};

use crate::state::auth::use_auth_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let on_logout = {
        let auth = auth.clone();
        move |_| {
            auth.logout();
            navigate(Route::Login.path(), Default::default());
        }
    };

    view! {
        <nav>
            <span class="nav-title">"Lead Tracker"</span>
            {move || {
                let logout = on_logout.clone();
                let authenticated = auth.is_authenticated();
                let links = nav_links(authenticated)
                    .iter()
                    .map(|route| view! { <A href=route.path()>{route.title()}</A> })
                    .collect_view();

                view! {
                    {links}
                    {authenticated.then(|| view! {
                        <button class="secondary" on:click=logout>"Logout"</button>
                    })}
                }
            }}
        </nav>
    }
}
