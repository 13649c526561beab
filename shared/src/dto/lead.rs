use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned lead identifier
pub type LeadId = i64;

/// Pipeline status of a lead
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum LeadStatus {
    #[default]
    Lead,
    Contacted,
    Qualified,
    Converted,
    Customer,
    Lost,
}

impl LeadStatus {
    /// Every status, in the order the status pickers list them.
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::Lead,
        LeadStatus::Converted,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Customer,
        LeadStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Lead => "Lead",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Converted => "Converted",
            LeadStatus::Customer => "Customer",
            LeadStatus::Lost => "Lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status name is not one of [`LeadStatus::ALL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lead status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for LeadStatus {
    type Err = UnknownStatus;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Lead record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Raw status text; older records may omit it.
    #[serde(default)]
    pub status: Option<String>,
}

impl Lead {
    /// Status text as stored by the server, `Lead` when missing.
    pub fn status_text(&self) -> &str {
        self.status.as_deref().unwrap_or(LeadStatus::Lead.as_str())
    }

    /// Parsed status, `None` when the server holds a value outside [`LeadStatus::ALL`].
    pub fn status(&self) -> Option<LeadStatus> {
        self.status_text().parse().ok()
    }
}

/// Create payload (`POST /leads`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Field-level edit payload (`PUT /leads/{id}`).
///
/// Absent fields are left untouched by the server. `phone: Some(None)` is sent as
/// `"phone": null` and clears the number.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct LeadPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
}

impl LeadPatch {
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Names of the fields this patch carries, in form order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.email.is_some() {
            fields.push("email");
        }
        if self.phone.is_some() {
            fields.push("phone");
        }
        if self.status.is_some() {
            fields.push("status");
        }
        fields
    }
}
