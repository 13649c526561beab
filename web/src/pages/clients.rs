//! Clients page (read-only)

use leptos::prelude::*;
use lib_core::views::{clients::COLUMNS, ClientsView};
use shared::{id_or_dash, or_dash};

use crate::components::Banner;
use crate::services::api::use_api;
use crate::services::dispatch::act;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let api = use_api();
    let clients = RwSignal::new(ClientsView::new());
    act(api.clone(), clients, |v| Some(v.mount()));

    let refresh = move |_| act(api.clone(), clients, ClientsView::refresh);
    let error = Signal::derive(move || clients.with(|v| v.error().map(str::to_string)));

    view! {
        <div class="card">
            <div class="filters">
                <h1 style="margin-right: auto;">"Clients"</h1>
                <button
                    class="secondary"
                    on:click=refresh
                    disabled=move || clients.with(|v| v.is_loading())
                >
                    "Refresh"
                </button>
            </div>
            <Banner message=Signal::derive(|| None) error=error/>

            {move || {
                let (loading, rows) = clients.with(|v| (v.is_loading(), v.clients().to_vec()));
                if loading {
                    return view! { <p class="muted">"Loading..."</p> }.into_any();
                }
                if rows.is_empty() {
                    return view! { <p class="muted">"No clients yet. Convert a lead to create one."</p> }
                        .into_any();
                }
                view! {
                    <table>
                        <thead>
                            <tr>
                                {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|client| view! {
                                    <tr>
                                        <td>{client.id}</td>
                                        <td>{client.name}</td>
                                        <td>{client.email}</td>
                                        <td>{or_dash(client.phone.as_deref())}</td>
                                        <td>{id_or_dash(client.source_lead_id)}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
