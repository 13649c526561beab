//! Table and banner rendering for the shell.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use lib_core::views::clients::COLUMNS as CLIENT_COLUMNS;
use lib_core::views::leads::COLUMNS as LEAD_COLUMNS;
use lib_core::views::{FieldErrors, StatCard};
use shared::{id_or_dash, or_dash, Client, Lead};

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

pub fn leads_table(leads: &[&Lead]) -> Table {
    let mut table = table(&LEAD_COLUMNS);
    for lead in leads {
        table.add_row(vec![
            lead.id.to_string(),
            lead.name.clone(),
            lead.email.clone(),
            or_dash(lead.phone.as_deref()),
            lead.status_text().to_string(),
        ]);
    }
    table
}

pub fn clients_table(clients: &[Client]) -> Table {
    let mut table = table(&CLIENT_COLUMNS);
    for client in clients {
        table.add_row(vec![
            client.id.to_string(),
            client.name.clone(),
            client.email.clone(),
            or_dash(client.phone.as_deref()),
            id_or_dash(client.source_lead_id),
        ]);
    }
    table
}

/// One column per card: titles in the header, values below.
pub fn stat_cards_table(cards: &[StatCard]) -> Table {
    let titles: Vec<&str> = cards.iter().map(|card| card.title).collect();
    let mut table = table(&titles);
    table.add_row(cards.iter().map(|card| card.value.to_string()).collect::<Vec<_>>());
    table
}

/// Success and error banners, each on its own line.
pub fn banners(message: Option<&str>, error: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(message) = message {
        lines.push(format!("✓ {message}"));
    }
    if let Some(error) = error {
        lines.push(format!("✗ {error}"));
    }
    lines
}

pub fn field_errors(errors: &FieldErrors) -> Vec<String> {
    [("Name", &errors.name), ("Email", &errors.email)]
        .into_iter()
        .filter_map(|(field, error)| error.as_ref().map(|e| format!("  {field}: {e}")))
        .collect()
}
