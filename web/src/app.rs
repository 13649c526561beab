//! Root component and route table

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use lib_core::Route as Page;

use crate::components::{Navbar, Protected};
use crate::pages::{ClientsPage, DashboardPage, LeadsPage, LoginPage};
use crate::services::api::{provide_api_context, GlooApi};
use crate::state::auth::provide_auth_context;
use crate::utils::constants::API_BASE;

#[component]
pub fn App() -> impl IntoView {
    let auth = provide_auth_context();
    provide_api_context(GlooApi::new(API_BASE, auth.session()));

    view! {
        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/") view=|| view! { <Protected page=Page::Leads><LeadsPage/></Protected> }/>
                    <Route path=path!("/leads") view=|| view! { <Protected page=Page::Leads><LeadsPage/></Protected> }/>
                    <Route path=path!("/clients") view=|| view! { <Protected page=Page::Clients><ClientsPage/></Protected> }/>
                    <Route path=path!("/dashboard") view=|| view! { <Protected page=Page::Dashboard><DashboardPage/></Protected> }/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card" style="max-width: 500px; margin: 60px auto; text-align: center;">
            <h1>"404 - Page Not Found"</h1>
            <p class="muted">"The page you're looking for doesn't exist."</p>
            <A href=Page::Leads.path()>"Go to Leads"</A>
        </div>
    }
}
