//! Dashboard page

use leptos::prelude::*;
use lib_core::views::{stat_cards, DashboardState, DashboardView};

use crate::components::StatCard;
use crate::services::api::use_api;
use crate::services::dispatch::act;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let dashboard = RwSignal::new(DashboardView::new());
    act(api.clone(), dashboard, |v| Some(v.mount()));

    let refresh = move |_| act(api.clone(), dashboard, DashboardView::refresh);

    view! {
        <div class="filters" style="margin-bottom: 20px;">
            <h1 style="margin-right: auto;">"Dashboard"</h1>
            <button class="secondary" on:click=refresh>"Refresh"</button>
        </div>

        {move || match dashboard.with(|v| v.state().clone()) {
            DashboardState::Loading => view! { <p class="muted">"Loading..."</p> }.into_any(),
            DashboardState::Failed(error) => view! { <div class="banner error">{error}</div> }.into_any(),
            DashboardState::Ready(stats) => view! {
                <div class="stats">
                    {stat_cards(&stats)
                        .into_iter()
                        .map(|card| view! { <StatCard title=card.title value=card.value/> })
                        .collect_view()}
                </div>
            }
            .into_any(),
        }}
    }
}
