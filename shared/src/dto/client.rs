use serde::{Deserialize, Serialize};

use super::lead::LeadId;

/// Client record, created server-side when a lead is converted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Lead this client was converted from
    #[serde(default)]
    pub source_lead_id: Option<LeadId>,
}
