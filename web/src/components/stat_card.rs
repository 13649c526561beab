use leptos::prelude::*;

#[component]
pub fn StatCard(title: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="muted">{title}</div>
            <div class="value">{value}</div>
        </div>
    }
}
