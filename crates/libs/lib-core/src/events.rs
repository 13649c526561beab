//! # Commands and Events
//!
//! Views never call the API themselves. A user action returns a [`Command`]; the
//! front-end runs it with [`execute`] and hands the resulting [`Event`] back to the
//! view through [`Screen::apply`], which may ask for a follow-up command (the
//! refetch after a create, for example).
//!
//! ```text
//! view.submit() ──Command──▶ execute(api) ──Event──▶ view.apply() ──Option<Command>──┐
//!       ▲                                                                             │
//!       └─────────────────────────────── follow-up ───────────────────────────────────┘
//! ```

use shared::{Client, Lead, LeadId, LeadPatch, NewLead, Stats, TokenResponse};
use std::fmt;

use crate::error::Result;
use crate::service::CrmApi;

/// A request a view wants made.
#[derive(Clone, PartialEq)]
pub enum Command {
    Login { username: String, password: String },
    FetchLeads,
    CreateLead(NewLead),
    UpdateLead { id: LeadId, patch: LeadPatch },
    DeleteLead(LeadId),
    ConvertLead(LeadId),
    FetchClients,
    FetchStats,
}

impl Command {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::FetchLeads => "fetch_leads",
            Command::CreateLead(_) => "create_lead",
            Command::UpdateLead { .. } => "update_lead",
            Command::DeleteLead(_) => "delete_lead",
            Command::ConvertLead(_) => "convert_lead",
            Command::FetchClients => "fetch_clients",
            Command::FetchStats => "fetch_stats",
        }
    }
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Command::FetchLeads => f.write_str("FetchLeads"),
            Command::CreateLead(lead) => f.debug_tuple("CreateLead").field(lead).finish(),
            Command::UpdateLead { id, patch } => f
                .debug_struct("UpdateLead")
                .field("id", id)
                .field("patch", patch)
                .finish(),
            Command::DeleteLead(id) => f.debug_tuple("DeleteLead").field(id).finish(),
            Command::ConvertLead(id) => f.debug_tuple("ConvertLead").field(id).finish(),
            Command::FetchClients => f.write_str("FetchClients"),
            Command::FetchStats => f.write_str("FetchStats"),
        }
    }
}

/// Outcome of a [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LoggedIn(Result<TokenResponse>),
    LeadsLoaded(Result<Vec<Lead>>),
    LeadCreated(Result<Lead>),
    LeadUpdated { id: LeadId, result: Result<Lead> },
    LeadDeleted { id: LeadId, result: Result<()> },
    LeadConverted { id: LeadId, result: Result<()> },
    ClientsLoaded(Result<Vec<Client>>),
    StatsLoaded(Result<Stats>),
}

/// A view that consumes events.
pub trait Screen {
    /// Fold an event into the view state, returning a follow-up command if the
    /// view needs one.
    fn apply(&mut self, event: Event) -> Option<Command>;
}

/// Run one command against the API.
pub async fn execute(api: &dyn CrmApi, command: Command) -> Event {
    tracing::debug!(command = command.name(), "Executing command");
    match command {
        Command::Login { username, password } => {
            Event::LoggedIn(api.login(&username, &password).await)
        }
        Command::FetchLeads => Event::LeadsLoaded(api.list_leads().await),
        Command::CreateLead(lead) => Event::LeadCreated(api.create_lead(&lead).await),
        Command::UpdateLead { id, patch } => Event::LeadUpdated {
            id,
            result: api.update_lead(id, &patch).await,
        },
        Command::DeleteLead(id) => Event::LeadDeleted {
            id,
            result: api.delete_lead(id).await,
        },
        Command::ConvertLead(id) => Event::LeadConverted {
            id,
            result: api.convert_lead(id).await,
        },
        Command::FetchClients => Event::ClientsLoaded(api.list_clients().await),
        Command::FetchStats => Event::StatsLoaded(api.stats().await),
    }
}

/// Run `command` and every follow-up the screen asks for, in order.
pub async fn drive<S>(api: &dyn CrmApi, screen: &mut S, command: Command)
where
    S: Screen + ?Sized,
{
    let mut next = Some(command);
    while let Some(command) = next {
        let event = execute(api, command).await;
        next = screen.apply(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_debug_redacts_password() {
        let command = Command::Login {
            username: "admin@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{command:?}");
        assert!(rendered.contains("admin@example.com"));
        assert!(!rendered.contains("hunter2"));
        assert_eq!(command.name(), "login");
    }
}
