//! # Clients View
//!
//! Read-only list of clients. Load errors show as a banner above whatever was
//! loaded before.

use shared::Client;

use crate::events::{Command, Event, Screen};

/// Table columns, in display order.
pub const COLUMNS: [&str; 5] = ["ID", "Name", "Email", "Phone", "Source Lead"];

const ERR_LOAD: &str = "Failed to load clients";

#[derive(Debug, Clone, Default)]
pub struct ClientsView {
    clients: Vec<Client>,
    loading: bool,
    error: Option<String>,
}

impl ClientsView {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mount(&mut self) -> Command {
        self.loading = true;
        self.error = None;
        Command::FetchClients
    }

    /// Reload; ignored while a load is in flight.
    pub fn refresh(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        Some(self.mount())
    }
}

impl Screen for ClientsView {
    fn apply(&mut self, event: Event) -> Option<Command> {
        if let Event::ClientsLoaded(result) = event {
            self.loading = false;
            match result {
                Ok(clients) => self.clients = clients,
                Err(e) => {
                    tracing::warn!(error = %e, "Loading clients failed");
                    self.error = Some(e.user_message(ERR_LOAD));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::events::drive;
    use crate::testing::{lead, FakeCrm};

    #[test]
    fn test_columns_start_with_id() {
        assert_eq!(COLUMNS[0], "ID");
        assert_eq!(COLUMNS[4], "Source Lead");
    }

    #[tokio::test]
    async fn test_lists_converted_clients() {
        let api = FakeCrm::with_leads(vec![lead(2, "Grace", "Lead")]);
        drive(&api, &mut crate::views::LeadsView::new(), Command::ConvertLead(2)).await;

        let mut view = ClientsView::new();
        let cmd = view.mount();
        drive(&api, &mut view, cmd).await;

        assert!(!view.is_loading());
        assert_eq!(view.clients().len(), 1);
        assert_eq!(view.clients()[0].name, "Grace");
        assert_eq!(view.clients()[0].source_lead_id, Some(2));
    }

    #[tokio::test]
    async fn test_error_banner_keeps_previous_rows() {
        let api = FakeCrm::with_leads(vec![lead(2, "Grace", "Lead")]);
        drive(&api, &mut crate::views::LeadsView::new(), Command::ConvertLead(2)).await;

        let mut view = ClientsView::new();
        let cmd = view.mount();
        drive(&api, &mut view, cmd).await;

        api.fail_next(AppError::Network("offline".to_string()));
        let cmd = view.refresh().unwrap();
        assert!(view.refresh().is_none());
        drive(&api, &mut view, cmd).await;

        assert_eq!(view.error(), Some("Failed to load clients"));
        assert_eq!(view.clients().len(), 1);
    }
}
