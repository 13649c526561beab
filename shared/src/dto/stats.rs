use serde::{Deserialize, Serialize};

/// Dashboard aggregate snapshot (`GET /stats`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Stats {
    pub total_leads: u64,
    pub converted_leads: u64,
    pub clients: u64,
}
