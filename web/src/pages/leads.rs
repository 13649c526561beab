//! Leads page: form, filters and table

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lib_core::views::leads::COLUMNS;
use lib_core::views::{LeadField, LeadForm, LeadsView, StatusFilter};
use shared::{or_dash, Lead, LeadStatus};

use crate::components::Banner;
use crate::services::api::{use_api, GlooApi};
use crate::services::dispatch::act;

#[component]
pub fn LeadsPage() -> impl IntoView {
    let api = use_api();
    let leads = RwSignal::new(LeadsView::new());
    act(api.clone(), leads, |v| Some(v.mount()));

    let message = Signal::derive(move || leads.with(|v| v.message().map(str::to_string)));
    let error = Signal::derive(move || leads.with(|v| v.error().map(str::to_string)));

    view! {
        <div class="filters" style="margin-bottom: 20px;">
            <h1 style="margin-right: auto;">"Leads"</h1>
            <button
                class="secondary"
                on:click={
                    let api = api.clone();
                    move |_| act(api.clone(), leads, LeadsView::refresh)
                }
                disabled=move || leads.with(|v| v.is_loading())
            >
                "Refresh"
            </button>
        </div>
        <Banner message=message error=error/>
        <LeadFormCard api=api.clone() leads=leads/>
        <Filters leads=leads/>
        <LeadTable api=api leads=leads/>
    }
}

#[component]
fn LeadFormCard(api: GlooApi, leads: RwSignal<LeadsView>) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        act(api.clone(), leads, LeadsView::submit);
    };

    let heading = move || match leads.with(|v| v.editing_id()) {
        Some(id) => format!("Edit lead #{id}"),
        None => "New lead".to_string(),
    };

    view! {
        <form class="card" on:submit=on_submit>
            <h2>{heading}</h2>
            {field_input(leads, LeadField::Name, "Name", "text")}
            {move || leads.with(|v| v.errors().name.clone()).map(|e| view! { <span class="field-error">{e}</span> })}
            {field_input(leads, LeadField::Email, "Email", "email")}
            {move || leads.with(|v| v.errors().email.clone()).map(|e| view! { <span class="field-error">{e}</span> })}
            {field_input(leads, LeadField::Phone, "Phone", "tel")}

            <Show when=move || leads.with(|v| v.is_editing())>
                <label>
                    "Status"
                    <select
                        prop:value=move || leads.with(|v| v.form().status.to_string())
                        on:change=move |ev| leads.update(|v| v.set_field(LeadField::Status, &event_target_value(&ev)))
                    >
                        {LeadStatus::ALL
                            .iter()
                            .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                {move || {
                    leads
                        .with(|v| v.pending_changes())
                        .filter(|changed| !changed.is_empty())
                        .map(|changed| view! { <p class="muted">"Changing: " {changed.join(", ")}</p> })
                }}
            </Show>

            <div style="display: flex; gap: 8px;">
                <button type="submit" disabled=move || leads.with(|v| v.is_submitting())>
                    {move || leads.with(|v| {
                        if v.is_submitting() {
                            "Saving..."
                        } else if v.is_editing() {
                            "Save changes"
                        } else {
                            "Add lead"
                        }
                    })}
                </button>
                <Show when=move || leads.with(|v| v.is_editing())>
                    <button type="button" class="secondary" on:click=move |_| leads.update(LeadsView::cancel_edit)>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}

fn field_text(form: &LeadForm, field: LeadField) -> String {
    match field {
        LeadField::Name => form.name.clone(),
        LeadField::Email => form.email.clone(),
        LeadField::Phone => form.phone.clone(),
        LeadField::Status => form.status.to_string(),
    }
}

fn field_input(
    leads: RwSignal<LeadsView>,
    field: LeadField,
    label: &'static str,
    kind: &'static str,
) -> impl IntoView {
    view! {
        <label>
            {label}
            <input
                type=kind
                prop:value=move || leads.with(|v| field_text(v.form(), field))
                on:input=move |ev| leads.update(|v| v.set_field(field, &event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn Filters(leads: RwSignal<LeadsView>) -> impl IntoView {
    let on_status = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<StatusFilter>() {
        Ok(filter) => leads.update(|v| v.set_status_filter(filter)),
        Err(e) => log::warn!("Ignoring status filter: {}", e),
    };

    view! {
        <div class="card filters">
            <label style="flex: 2;">
                "Search"
                <input
                    type="search"
                    placeholder="Name or email"
                    prop:value=move || leads.with(|v| v.search().to_string())
                    on:input=move |ev| leads.update(|v| v.set_search(event_target_value(&ev)))
                />
            </label>
            <label style="flex: 1;">
                "Status"
                <select
                    prop:value=move || leads.with(|v| v.status_filter().label().to_string())
                    on:change=on_status
                >
                    <option value="All">"All"</option>
                    {LeadStatus::ALL
                        .iter()
                        .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>
            <button type="button" class="secondary" on:click=move |_| leads.update(LeadsView::clear_filters)>
                "Clear"
            </button>
        </div>
    }
}

#[component]
fn LeadTable(api: GlooApi, leads: RwSignal<LeadsView>) -> impl IntoView {
    move || {
        let (loading, rows, total) = leads.with(|v| {
            let rows: Vec<Lead> = v.visible().into_iter().cloned().collect();
            (v.is_loading(), rows, v.leads().len())
        });

        if loading {
            return view! { <p class="muted">"Loading..."</p> }.into_any();
        }
        if total == 0 {
            return view! { <p class="muted">"No leads yet. Add one above."</p> }.into_any();
        }
        if rows.is_empty() {
            return view! { <p class="muted">"No leads match the current filters."</p> }.into_any();
        }

        let shown = rows.len();
        view! {
            <div class="card">
                <table>
                    <thead>
                        <tr>
                            {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(|lead| lead_row(api.clone(), leads, lead)).collect_view()}
                    </tbody>
                </table>
                <p class="muted">{format!("Showing {shown} of {total}")}</p>
            </div>
        }
        .into_any()
    }
}

fn lead_row(api: GlooApi, leads: RwSignal<LeadsView>, lead: Lead) -> impl IntoView {
    let id = lead.id;
    let phone = or_dash(lead.phone.as_deref());
    let status = lead.status_text().to_string();

    let on_edit = move |_| {
        leads.update(|v| {
            v.start_edit(id);
        });
    };
    let on_delete = {
        let api = api.clone();
        move |_| act(api.clone(), leads, move |v| v.delete(id))
    };
    let on_convert = move |_| act(api.clone(), leads, move |v| v.convert(id));

    let deleting = move || leads.with(|v| v.is_deleting(id));
    let converting = move || leads.with(|v| v.is_converting(id));
    let edit_disabled = move || leads.with(|v| !v.can_edit(id));
    let convert_disabled = move || leads.with(|v| !v.can_convert(id));

    view! {
        <tr class:editing=move || leads.with(|v| v.editing_id() == Some(id))>
            <td>{id}</td>
            <td>{lead.name}</td>
            <td>{lead.email}</td>
            <td>{phone}</td>
            <td>{status}</td>
            <td class="actions">
                <button class="secondary" on:click=on_edit disabled=edit_disabled>
                    "Edit"
                </button>
                <button class="secondary" on:click=on_delete disabled=deleting>
                    {move || if deleting() { "Deleting..." } else { "Delete" }}
                </button>
                <button on:click=on_convert disabled=convert_disabled>
                    {move || if converting() { "Converting..." } else { "Convert" }}
                </button>
            </td>
        </tr>
    }
}
