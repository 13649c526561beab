//! # Leads View
//!
//! List, filter, create, edit, delete and convert leads.
//!
//! The local list is a cache of server state. It only changes by
//! - replacing it with a fresh `GET /leads` (after load, create and convert),
//! - swapping in the record the server returned from an edit,
//! - dropping a row the server confirmed deleted.
//!
//! Submit, delete and convert each have their own busy flag so the same action
//! cannot be fired twice while in flight; different actions may overlap.

use std::collections::HashSet;
use std::str::FromStr;

use shared::{Lead, LeadId, LeadStatus, UnknownStatus};

use crate::events::{Command, Event, Screen};
use crate::views::lead_form::{FieldErrors, LeadField, LeadForm};

pub const MSG_CREATED: &str = "Lead created";
pub const MSG_UPDATED: &str = "Lead updated";
pub const MSG_DELETED: &str = "Lead deleted";
pub const MSG_CONVERTED: &str = "Lead converted to client";
pub const MSG_NO_CHANGES: &str = "No changes to save";

/// Table columns, in display order.
pub const COLUMNS: [&str; 5] = ["ID", "Name", "Email", "Phone", "Status"];

const ERR_LOAD: &str = "Failed to load leads";
const ERR_SAVE: &str = "Save failed";
const ERR_DELETE: &str = "Delete failed";
const ERR_CONVERT: &str = "Convert failed";

/// Status filter applied to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    /// Exact, case-insensitive status match.
    pub fn matches(&self, lead: &Lead) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => lead.status_text().eq_ignore_ascii_case(status.as_str()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Whether the form creates a new lead or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    /// `snapshot` is the form as it was when editing started; submit sends the
    /// difference against it.
    Edit { id: LeadId, snapshot: LeadForm },
}

#[derive(Debug, Clone, Default)]
pub struct LeadsView {
    leads: Vec<Lead>,
    loading: bool,

    form: LeadForm,
    mode: FormMode,
    errors: FieldErrors,

    submitting: bool,
    deleting: HashSet<LeadId>,
    converting: HashSet<LeadId>,

    message: Option<String>,
    error: Option<String>,

    search: String,
    status_filter: StatusFilter,
}

impl LeadsView {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    // region:    --- Accessors

    /// Everything loaded, unfiltered.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Rows to show: search term (name or email, case-insensitive substring) and
    /// status filter combined.
    pub fn visible(&self) -> Vec<&Lead> {
        let term = self.search.trim().to_lowercase();
        self.leads
            .iter()
            .filter(|lead| {
                term.is_empty()
                    || lead.name.to_lowercase().contains(&term)
                    || lead.email.to_lowercase().contains(&term)
            })
            .filter(|lead| self.status_filter.matches(lead))
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn editing_id(&self) -> Option<LeadId> {
        match self.mode {
            FormMode::Edit { id, .. } => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_deleting(&self, id: LeadId) -> bool {
        self.deleting.contains(&id)
    }

    /// Edit is offered unless a submit is in flight or the row is being deleted.
    pub fn can_edit(&self, id: LeadId) -> bool {
        !self.submitting && !self.deleting.contains(&id)
    }

    pub fn can_convert(&self, id: LeadId) -> bool {
        !self.converting.contains(&id) && !self.deleting.contains(&id)
    }

    pub fn is_converting(&self, id: LeadId) -> bool {
        self.converting.contains(&id)
    }

    /// Success banner
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Error banner
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    /// Fields the pending edit would send; `None` outside edit mode.
    pub fn pending_changes(&self) -> Option<Vec<&'static str>> {
        match &self.mode {
            FormMode::Edit { snapshot, .. } => Some(self.form.diff(snapshot).changed_fields()),
            FormMode::Create => None,
        }
    }

    // endregion: --- Accessors

    // region:    --- Actions

    /// Initial load.
    pub fn mount(&mut self) -> Command {
        self.loading = true;
        Command::FetchLeads
    }

    /// User-requested reload; ignored while a load is in flight.
    pub fn refresh(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        self.clear_banners();
        self.loading = true;
        Some(Command::FetchLeads)
    }

    pub fn set_field(&mut self, field: LeadField, value: &str) {
        self.clear_banners();
        self.form.set(field, value);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.status_filter = StatusFilter::All;
    }

    /// Load a lead into the form. Refused while a submit is in flight, while the
    /// lead is being deleted or when it is not in the list.
    pub fn start_edit(&mut self, id: LeadId) -> bool {
        if !self.can_edit(id) {
            return false;
        }
        let Some(lead) = self.leads.iter().find(|l| l.id == id) else {
            return false;
        };

        let snapshot = LeadForm::from_lead(lead);
        self.clear_banners();
        self.form = snapshot.clone();
        self.mode = FormMode::Edit { id, snapshot };
        self.errors = FieldErrors::default();
        true
    }

    pub fn cancel_edit(&mut self) {
        self.clear_banners();
        self.reset_form();
    }

    /// Validate and produce the create or edit request.
    ///
    /// Returns `None` when validation fails, when an edit changed nothing (the
    /// view then reports [`MSG_NO_CHANGES`]) or while a submit is in flight.
    pub fn submit(&mut self) -> Option<Command> {
        if self.submitting {
            return None;
        }
        self.clear_banners();

        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return None;
        }

        let command = match &self.mode {
            FormMode::Create => Command::CreateLead(self.form.to_new_lead()),
            FormMode::Edit { id, snapshot } => {
                let patch = self.form.diff(snapshot);
                if patch.is_empty() {
                    self.message = Some(MSG_NO_CHANGES.to_string());
                    return None;
                }
                Command::UpdateLead { id: *id, patch }
            }
        };

        self.submitting = true;
        Some(command)
    }

    pub fn delete(&mut self, id: LeadId) -> Option<Command> {
        if !self.deleting.insert(id) {
            return None;
        }
        self.clear_banners();
        Some(Command::DeleteLead(id))
    }

    pub fn convert(&mut self, id: LeadId) -> Option<Command> {
        if self.deleting.contains(&id) || !self.converting.insert(id) {
            return None;
        }
        self.clear_banners();
        Some(Command::ConvertLead(id))
    }

    // endregion: --- Actions

    fn clear_banners(&mut self) {
        self.message = None;
        self.error = None;
    }

    fn reset_form(&mut self) {
        self.form = LeadForm::default();
        self.mode = FormMode::Create;
        self.errors = FieldErrors::default();
    }

    fn refetch(&mut self) -> Option<Command> {
        self.loading = true;
        Some(Command::FetchLeads)
    }
}

impl Screen for LeadsView {
    fn apply(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::LeadsLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(leads) => self.leads = leads,
                    Err(e) => {
                        tracing::warn!(error = %e, "Loading leads failed");
                        self.error = Some(e.user_message(ERR_LOAD));
                    }
                }
                None
            }

            Event::LeadCreated(result) => {
                self.submitting = false;
                match result {
                    Ok(lead) => {
                        tracing::info!(lead_id = lead.id, "Lead created");
                        self.message = Some(MSG_CREATED.to_string());
                        if !self.is_editing() {
                            self.reset_form();
                        }
                        self.refetch()
                    }
                    Err(e) => {
                        self.error = Some(e.user_message(ERR_SAVE));
                        None
                    }
                }
            }

            Event::LeadUpdated { id, result } => {
                self.submitting = false;
                match result {
                    Ok(updated) => {
                        // A row deleted meanwhile stays deleted.
                        if let Some(slot) = self.leads.iter_mut().find(|l| l.id == id) {
                            *slot = updated;
                        }
                        self.message = Some(MSG_UPDATED.to_string());
                        if self.editing_id() == Some(id) {
                            self.reset_form();
                        }
                    }
                    Err(e) => self.error = Some(e.user_message(ERR_SAVE)),
                }
                None
            }

            Event::LeadDeleted { id, result } => {
                self.deleting.remove(&id);
                match result {
                    Ok(()) => {
                        self.leads.retain(|l| l.id != id);
                        self.message = Some(MSG_DELETED.to_string());
                        if self.editing_id() == Some(id) {
                            self.reset_form();
                        }
                    }
                    Err(e) => self.error = Some(e.user_message(ERR_DELETE)),
                }
                None
            }

            Event::LeadConverted { id, result } => {
                self.converting.remove(&id);
                match result {
                    Ok(()) => {
                        self.message = Some(MSG_CONVERTED.to_string());
                        self.refetch()
                    }
                    Err(e) => {
                        self.error = Some(e.user_message(ERR_CONVERT));
                        None
                    }
                }
            }

            Event::LoggedIn(_) | Event::ClientsLoaded(_) | Event::StatsLoaded(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::events::drive;
    use crate::testing::{lead, FakeCrm};
    use crate::views::ClientsView;

    async fn loaded(api: &FakeCrm) -> LeadsView {
        let mut view = LeadsView::new();
        let cmd = view.mount();
        drive(api, &mut view, cmd).await;
        api.clear_calls();
        view
    }

    fn fill(view: &mut LeadsView, name: &str, email: &str, phone: &str) {
        view.set_field(LeadField::Name, name);
        view.set_field(LeadField::Email, email);
        view.set_field(LeadField::Phone, phone);
    }

    #[tokio::test]
    async fn test_invalid_form_issues_no_request() {
        let api = FakeCrm::new();
        let mut view = loaded(&api).await;

        fill(&mut view, "", "ada@example.com", "");
        assert!(view.submit().is_none());
        assert_eq!(view.errors().name.as_deref(), Some("Name is required"));

        fill(&mut view, "Ada", "not-an-email", "");
        assert!(view.submit().is_none());
        assert_eq!(view.errors().email.as_deref(), Some("Email format looks invalid"));

        assert!(api.calls().is_empty());
        assert!(!view.is_submitting());
    }

    #[tokio::test]
    async fn test_create_then_refresh_shows_lead_once() {
        let api = FakeCrm::with_leads(vec![lead(1, "Grace", "Lead")]);
        let mut view = loaded(&api).await;

        fill(&mut view, "  Ada ", "ada@example.com", "");
        let cmd = view.submit().expect("valid form submits");
        drive(&api, &mut view, cmd).await;

        let posts = api.calls_to("POST");
        assert_eq!(posts.len(), 1);
        assert_eq!(
            posts[0].body,
            Some(serde_json::json!({ "name": "Ada", "email": "ada@example.com", "phone": null }))
        );
        assert_eq!(view.message(), Some(MSG_CREATED));
        assert_eq!(view.form(), &LeadForm::default());

        let cmd = view.refresh().expect("not loading");
        drive(&api, &mut view, cmd).await;
        let matching = view.leads().iter().filter(|l| l.email == "ada@example.com").count();
        assert_eq!(matching, 1);
        assert_eq!(view.leads().len(), 2);
    }

    #[tokio::test]
    async fn test_create_keeps_success_banner_through_refetch() {
        let api = FakeCrm::new();
        let mut view = loaded(&api).await;
        fill(&mut view, "Ada", "ada@example.com", "555");
        let cmd = view.submit().unwrap();
        drive(&api, &mut view, cmd).await;

        assert_eq!(api.calls_to("GET").len(), 1);
        assert_eq!(view.message(), Some(MSG_CREATED));
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_edit_without_changes_sends_nothing() {
        let api = FakeCrm::with_leads(vec![lead(3, "Grace", "Lead")]);
        let mut view = loaded(&api).await;

        assert!(view.start_edit(3));
        assert_eq!(view.pending_changes(), Some(vec![]));
        assert!(view.submit().is_none());

        assert_eq!(view.message(), Some(MSG_NO_CHANGES));
        assert!(api.calls_to("PUT").is_empty());
        assert_eq!(view.editing_id(), Some(3));
    }

    #[tokio::test]
    async fn test_edit_phone_only_patches_phone() {
        let api = FakeCrm::with_leads(vec![lead(3, "Grace", "Lead"), lead(4, "Alan", "Lead")]);
        let mut view = loaded(&api).await;

        assert!(view.start_edit(3));
        view.set_field(LeadField::Phone, "555-0100");
        assert_eq!(view.pending_changes(), Some(vec!["phone"]));

        let cmd = view.submit().expect("phone changed");
        drive(&api, &mut view, cmd).await;

        let puts = api.calls_to("PUT");
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].path, "/leads/3");
        assert_eq!(puts[0].body, Some(serde_json::json!({ "phone": "555-0100" })));

        // Merged in place, no refetch.
        assert!(api.calls_to("GET").is_empty());
        assert_eq!(view.leads()[0].phone.as_deref(), Some("555-0100"));
        assert_eq!(view.leads()[1].id, 4);
        assert!(!view.is_editing());
        assert_eq!(view.message(), Some(MSG_UPDATED));
    }

    #[tokio::test]
    async fn test_failed_edit_stays_in_edit_mode() {
        let api = FakeCrm::with_leads(vec![lead(3, "Grace", "Lead")]);
        let mut view = loaded(&api).await;
        view.start_edit(3);
        view.set_field(LeadField::Name, "Grace Hopper");

        api.fail_next(AppError::Http {
            status: 400,
            detail: Some("Email already registered".to_string()),
        });
        let cmd = view.submit().unwrap();
        drive(&api, &mut view, cmd).await;

        assert_eq!(view.error(), Some("Email already registered"));
        assert_eq!(view.editing_id(), Some(3));
        assert_eq!(view.form().name, "Grace Hopper");
        assert!(!view.is_submitting());
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_row() {
        let api = FakeCrm::with_leads((1..=6).map(|id| lead(id, &format!("Lead{id}"), "Lead")).collect());
        let mut view = loaded(&api).await;

        let cmd = view.delete(5).unwrap();
        assert!(view.is_deleting(5));
        assert!(view.delete(5).is_none(), "same delete cannot fire twice");
        drive(&api, &mut view, cmd).await;

        let ids: Vec<LeadId> = view.leads().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 6]);
        assert!(!view.is_deleting(5));
        assert_eq!(view.message(), Some(MSG_DELETED));
        assert!(api.calls_to("GET").is_empty());
    }

    #[tokio::test]
    async fn test_delete_cancels_edit_of_same_row() {
        let api = FakeCrm::with_leads(vec![lead(1, "Grace", "Lead"), lead(2, "Alan", "Lead")]);
        let mut view = loaded(&api).await;

        view.start_edit(2);
        let cmd = view.delete(2).unwrap();
        drive(&api, &mut view, cmd).await;
        assert!(!view.is_editing());

        view.start_edit(1);
        let cmd = view.delete(1).unwrap();
        api.fail_next(AppError::Network("connection reset".to_string()));
        drive(&api, &mut view, cmd).await;
        assert_eq!(view.error(), Some("Delete failed"));
        assert_eq!(view.editing_id(), Some(1));
    }

    #[tokio::test]
    async fn test_convert_refetches_and_creates_client() {
        let api = FakeCrm::with_leads((1..=8).map(|id| lead(id, &format!("Lead{id}"), "Lead")).collect());
        let mut view = loaded(&api).await;

        let cmd = view.convert(7).unwrap();
        assert!(view.is_converting(7));
        drive(&api, &mut view, cmd).await;

        assert_eq!(view.message(), Some(MSG_CONVERTED));
        assert_eq!(api.calls_to("GET").len(), 1, "full refetch after convert");
        let converted = view.leads().iter().find(|l| l.id == 7).unwrap();
        assert_eq!(converted.status(), Some(LeadStatus::Converted));

        let mut clients = ClientsView::new();
        let cmd = clients.mount();
        drive(&api, &mut clients, cmd).await;
        assert!(clients.clients().iter().any(|c| c.source_lead_id == Some(7)));
    }

    #[tokio::test]
    async fn test_convert_failure_reports_and_keeps_list() {
        let api = FakeCrm::with_leads(vec![lead(7, "Grace", "Lead")]);
        let mut view = loaded(&api).await;

        api.fail_next(AppError::Http { status: 500, detail: None });
        let cmd = view.convert(7).unwrap();
        drive(&api, &mut view, cmd).await;

        assert_eq!(view.error(), Some("Convert failed"));
        assert_eq!(view.leads()[0].status_text(), "Lead");
        assert!(!view.is_converting(7));
        assert!(api.calls_to("GET").is_empty());
    }

    #[tokio::test]
    async fn test_different_actions_may_overlap() {
        let api = FakeCrm::with_leads(vec![lead(1, "Grace", "Lead"), lead(2, "Alan", "Lead")]);
        let mut view = loaded(&api).await;

        view.start_edit(1);
        view.set_field(LeadField::Phone, "555");
        let edit = view.submit().unwrap();
        let delete = view.delete(2).unwrap();
        let convert = view.convert(1).unwrap();
        assert!(view.is_submitting() && view.is_deleting(2) && view.is_converting(1));
        assert!(view.submit().is_none());
        assert!(!view.start_edit(2));

        drive(&api, &mut view, delete).await;
        drive(&api, &mut view, edit).await;
        drive(&api, &mut view, convert).await;

        let ids: Vec<LeadId> = view.leads().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(view.leads()[0].phone.as_deref(), Some("555"));
    }

    #[tokio::test]
    async fn test_row_being_deleted_blocks_edit_and_convert() {
        let api = FakeCrm::with_leads(vec![lead(1, "Grace", "Lead"), lead(2, "Alan", "Lead")]);
        let mut view = loaded(&api).await;

        let delete = view.delete(1).unwrap();
        assert!(!view.can_edit(1) && !view.can_convert(1));
        assert!(view.can_edit(2) && view.can_convert(2));
        assert!(!view.start_edit(1));
        assert!(view.convert(1).is_none());
        assert!(!view.is_converting(1));

        drive(&api, &mut view, delete).await;
        assert!(api.calls_to("POST").is_empty());
        assert!(view.leads().iter().all(|l| l.id != 1));
    }

    #[tokio::test]
    async fn test_load_failure_shows_detail_and_keeps_stale_rows() {
        let api = FakeCrm::with_leads(vec![lead(1, "Grace", "Lead")]);
        let mut view = loaded(&api).await;

        api.fail_next(AppError::Http {
            status: 401,
            detail: Some("Invalid or expired token".to_string()),
        });
        let cmd = view.refresh().unwrap();
        assert!(view.refresh().is_none(), "refresh ignored while loading");
        drive(&api, &mut view, cmd).await;

        assert_eq!(view.error(), Some("Invalid or expired token"));
        assert_eq!(view.leads().len(), 1);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_filter_by_status_and_search() {
        let api = FakeCrm::with_leads(vec![
            lead(1, "Grace", "Converted"),
            lead(2, "Alan", "converted"),
            lead(3, "Ada", "Lead"),
            lead(4, "Edsger", "CONVERTED"),
            lead(5, "Barbara", "Lost"),
        ]);
        let mut view = loaded(&api).await;

        view.set_status_filter("Converted".parse().unwrap());
        view.set_search("");
        let ids: Vec<LeadId> = view.visible().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert!(view
            .visible()
            .iter()
            .all(|l| l.status_text().eq_ignore_ascii_case("converted")));

        view.set_search("  ALAN@");
        let ids: Vec<LeadId> = view.visible().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2]);

        view.clear_filters();
        assert_eq!(view.visible().len(), 5);
        assert_eq!(view.leads().len(), 5, "filtering never drops loaded rows");
    }

    #[test]
    fn test_columns_start_with_id() {
        assert_eq!(COLUMNS, ["ID", "Name", "Email", "Phone", "Status"]);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("lost".parse::<StatusFilter>(), Ok(StatusFilter::Only(LeadStatus::Lost)));
        assert!("pending".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::Only(LeadStatus::Lost).label(), "Lost");
    }

    #[test]
    fn test_editing_field_clears_banners() {
        let mut view = LeadsView::new();
        view.error = Some("Save failed".to_string());
        view.set_field(LeadField::Name, "A");
        assert!(view.error().is_none());
    }
}
