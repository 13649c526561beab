//! Lead create/edit form: field values, validation and the edit diff.

use lib_utils::validation::{validate_email, validate_not_empty};
use shared::{Lead, LeadPatch, LeadStatus, NewLead};

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Status,
}

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
}

/// Inline validation messages, one per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl LeadForm {
    /// Form pre-filled from an existing lead (the edit snapshot).
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone().unwrap_or_default(),
            status: lead.status().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: LeadField, value: &str) {
        match field {
            LeadField::Name => self.name = value.to_string(),
            LeadField::Email => self.email = value.to_string(),
            LeadField::Phone => self.phone = value.to_string(),
            // Unknown status text leaves the selection unchanged.
            LeadField::Status => {
                if let Ok(status) = value.parse() {
                    self.status = status;
                }
            }
        }
    }

    /// Name required; email required and `local@domain.tld`; phone free-form.
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: validate_not_empty(&self.name, "Name").err(),
            email: validate_email(&self.email).err(),
        }
    }

    /// Create payload: trimmed values, blank phone sent as null.
    pub fn to_new_lead(&self) -> NewLead {
        NewLead {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(&self.phone),
        }
    }

    /// Fields that differ from `snapshot`, ready to send as an edit.
    pub fn diff(&self, snapshot: &LeadForm) -> LeadPatch {
        let changed = |now: &str, before: &str| now.trim() != before.trim();

        LeadPatch {
            name: changed(&self.name, &snapshot.name).then(|| self.name.trim().to_string()),
            email: changed(&self.email, &snapshot.email).then(|| self.email.trim().to_string()),
            phone: changed(&self.phone, &snapshot.phone).then(|| non_blank(&self.phone)),
            status: (self.status != snapshot.status).then_some(self.status),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> LeadForm {
        LeadForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            status: LeadStatus::Lead,
        }
    }

    #[test]
    fn test_validate_reports_each_field() {
        let errors = LeadForm::default().validate();
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));

        let mut form = snapshot();
        form.email = "ada.example.com".to_string();
        let errors = form.validate();
        assert!(errors.name.is_none());
        assert_eq!(errors.email.as_deref(), Some("Email format looks invalid"));

        assert!(snapshot().validate().is_empty());
    }

    #[test]
    fn test_new_lead_is_trimmed() {
        let form = LeadForm {
            name: "  Ada ".to_string(),
            email: " ada@example.com".to_string(),
            phone: "   ".to_string(),
            status: LeadStatus::Qualified,
        };
        let payload = form.to_new_lead();
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.phone, None);
    }

    #[test]
    fn test_diff_unchanged_is_empty() {
        let mut form = snapshot();
        form.name = "Ada Lovelace  ".to_string();
        assert!(form.diff(&snapshot()).is_empty());
    }

    #[test]
    fn test_diff_only_changed_fields() {
        let mut form = snapshot();
        form.phone = "555-0100".to_string();
        form.set(LeadField::Status, "contacted");

        let patch = form.diff(&snapshot());
        assert_eq!(patch.changed_fields(), vec!["phone", "status"]);
        assert_eq!(patch.phone, Some(Some("555-0100".to_string())));
        assert_eq!(patch.status, Some(LeadStatus::Contacted));
    }

    #[test]
    fn test_diff_clearing_phone() {
        let mut before = snapshot();
        before.phone = "555-0100".to_string();
        let mut form = before.clone();
        form.phone = String::new();
        assert_eq!(form.diff(&before).phone, Some(None));
    }

    #[test]
    fn test_unknown_status_snapshot_is_not_a_change() {
        let lead = Lead {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            status: Some("Archived".to_string()),
        };
        let snapshot = LeadForm::from_lead(&lead);
        assert_eq!(snapshot.status, LeadStatus::Lead);
        assert!(snapshot.clone().diff(&snapshot).is_empty());
    }
}
