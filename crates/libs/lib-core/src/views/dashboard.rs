//! # Dashboard View
//!
//! Three summary cards. Unlike the list views, loading and errors take over the
//! whole view instead of sitting next to stale content.

use shared::Stats;

use crate::events::{Command, Event, Screen};

const ERR_LOAD: &str = "Failed to load stats";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardState {
    Loading,
    Failed(String),
    Ready(Stats),
}

/// One summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
}

/// Cards for a stats snapshot, in display order.
pub fn stat_cards(stats: &Stats) -> [StatCard; 3] {
    [
        StatCard {
            title: "Total Leads",
            value: stats.total_leads,
        },
        StatCard {
            title: "Converted Leads",
            value: stats.converted_leads,
        },
        StatCard {
            title: "Clients",
            value: stats.clients,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    state: DashboardState,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            state: DashboardState::Loading,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Cards once stats are loaded.
    pub fn cards(&self) -> Option<[StatCard; 3]> {
        match &self.state {
            DashboardState::Ready(stats) => Some(stat_cards(stats)),
            _ => None,
        }
    }

    pub fn mount(&mut self) -> Command {
        self.state = DashboardState::Loading;
        Command::FetchStats
    }

    /// Reload; ignored while a load is in flight.
    pub fn refresh(&mut self) -> Option<Command> {
        if self.state == DashboardState::Loading {
            return None;
        }
        Some(self.mount())
    }
}

impl Screen for DashboardView {
    fn apply(&mut self, event: Event) -> Option<Command> {
        if let Event::StatsLoaded(result) = event {
            self.state = match result {
                Ok(stats) => DashboardState::Ready(stats),
                Err(e) => {
                    tracing::warn!(error = %e, "Loading stats failed");
                    DashboardState::Failed(e.user_message(ERR_LOAD))
                }
            };
        }
        None
    }
}
