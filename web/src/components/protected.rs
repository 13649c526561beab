//! Route guard wrapper

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::NavigateOptions;
use lib_core::{Navigation, Route};

use crate::state::auth::use_auth_context;

/// Render `children` only when the guard allows `page`; otherwise replace the
/// history entry with the login page.
#[component]
pub fn Protected(page: Route, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_context();

    move || match auth.navigation(page) {
        Navigation::Render(_) => children().into_any(),
        Navigation::Redirect { to, replace } => view! {
            <Redirect
                path=to.path()
                options=NavigateOptions {
                    replace,
                    ..Default::default()
                }
            />
        }
        .into_any(),
    }
}
