//! # Interactive Shell
//!
//! Line-oriented front-end over the shared views. Each command maps onto a view
//! action; the resulting [`Command`](lib_core::Command) is driven against the API
//! and the page is printed again. Navigation goes through the same route guard as
//! the browser app, so protected pages bounce to login when signed out.

pub mod commands;
pub mod render;

use std::io::{self, Write};
use std::ops::ControlFlow;

use lib_core::router::HOME_AFTER_LOGIN;
use lib_core::views::{ClientsView, DashboardState, DashboardView, LeadField, LeadForm, LeadsView, LoginView};
use lib_core::{drive, guard, AuthSession, CrmApi, Navigation, Route};
use shared::{LeadId, LeadStatus};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

pub use commands::{ParseError, Password, ShellCommand, HELP};

/// Typed at the phone prompt to clear the number.
const CLEAR_VALUE: &str = "-";
/// Input is read line by line from any reader, so the password is not hidden.
pub const PASSWORD_PROMPT: &str = "Password (echoed)";

pub struct Shell<'a, R, W> {
    api: &'a dyn CrmApi,
    session: AuthSession,
    input: Lines<R>,
    out: W,

    route: Route,
    login: LoginView,
    leads: LeadsView,
    clients: ClientsView,
    dashboard: DashboardView,
}

impl<'a, R, W> Shell<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(api: &'a dyn CrmApi, session: AuthSession, input: R, out: W) -> Self {
        Self {
            api,
            login: LoginView::new(session.clone()),
            session,
            input: input.lines(),
            out,
            route: Route::Login,
            leads: LeadsView::new(),
            clients: ClientsView::new(),
            dashboard: DashboardView::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn leads(&self) -> &LeadsView {
        &self.leads
    }

    /// Hand back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read and run commands until `quit` or end of input.
    pub async fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Lead Tracker console. Type `help` for commands.")?;
        if self.session.is_authenticated() {
            self.navigate(HOME_AFTER_LOGIN).await?;
        } else {
            self.render()?;
        }

        loop {
            write!(self.out, "{}> ", self.route.title().to_lowercase())?;
            self.out.flush()?;

            let Some(line) = self.input.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<ShellCommand>() {
                Ok(command) => {
                    if self.handle(command).await?.is_break() {
                        break;
                    }
                }
                Err(e) => writeln!(self.out, "{e}")?,
            }
        }

        tracing::info!("Shell exited");
        Ok(())
    }

    pub async fn handle(&mut self, command: ShellCommand) -> io::Result<ControlFlow<()>> {
        tracing::debug!(command = command.name(), route = self.route.path(), "Shell command");

        match command {
            ShellCommand::Help => writeln!(self.out, "{HELP}")?,
            ShellCommand::Quit => return Ok(ControlFlow::Break(())),
            ShellCommand::Login { email, password } => self.login(email, password).await?,
            ShellCommand::Logout => self.logout()?,
            ShellCommand::Open(route) => self.navigate(route).await?,
            ShellCommand::Refresh => self.refresh().await?,
            ShellCommand::Search(text) => {
                if self.on_leads().await? {
                    self.leads.set_search(text);
                    self.render_leads()?;
                }
            }
            ShellCommand::Filter(filter) => {
                if self.on_leads().await? {
                    self.leads.set_status_filter(filter);
                    self.render_leads()?;
                }
            }
            ShellCommand::New => {
                if self.on_leads().await? {
                    self.new_lead().await?;
                }
            }
            ShellCommand::Edit(id) => {
                if self.on_leads().await? {
                    self.edit_lead(id).await?;
                }
            }
            ShellCommand::Cancel => {
                if self.on_leads().await? {
                    let editing = self.leads.editing_id();
                    self.leads.cancel_edit();
                    match editing {
                        Some(id) => writeln!(self.out, "Stopped editing lead {id}.")?,
                        None => writeln!(self.out, "Form cleared.")?,
                    }
                }
            }
            ShellCommand::Delete(id) => {
                if self.on_leads().await? {
                    if let Some(command) = self.leads.delete(id) {
                        drive(self.api, &mut self.leads, command).await;
                    }
                    self.render_leads()?;
                }
            }
            ShellCommand::Convert(id) => {
                if self.on_leads().await? {
                    if let Some(command) = self.leads.convert(id) {
                        drive(self.api, &mut self.leads, command).await;
                    }
                    self.render_leads()?;
                }
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    // region:    --- Navigation

    /// Show `route` if the guard allows it, loading its data fresh.
    async fn navigate(&mut self, route: Route) -> io::Result<()> {
        match guard(route, &self.session) {
            Navigation::Redirect { to, .. } => {
                writeln!(self.out, "Please log in to view {}.", route.title())?;
                self.route = to;
                self.render()
            }
            Navigation::Render(route) => {
                self.route = route;
                self.load(route).await;
                self.render()
            }
        }
    }

    async fn load(&mut self, route: Route) {
        let api = self.api;
        match route {
            Route::Login => {}
            Route::Leads => {
                self.leads = LeadsView::new();
                let command = self.leads.mount();
                drive(api, &mut self.leads, command).await;
            }
            Route::Clients => {
                self.clients = ClientsView::new();
                let command = self.clients.mount();
                drive(api, &mut self.clients, command).await;
            }
            Route::Dashboard => {
                self.dashboard = DashboardView::new();
                let command = self.dashboard.mount();
                drive(api, &mut self.dashboard, command).await;
            }
        }
    }

    /// Lead actions need the leads page; open it first if elsewhere.
    async fn on_leads(&mut self) -> io::Result<bool> {
        if self.route != Route::Leads {
            self.navigate(Route::Leads).await?;
        }
        Ok(self.route == Route::Leads)
    }

    async fn refresh(&mut self) -> io::Result<()> {
        let api = self.api;
        match self.route {
            Route::Login => return writeln!(self.out, "Nothing to refresh."),
            Route::Leads => {
                if let Some(command) = self.leads.refresh() {
                    drive(api, &mut self.leads, command).await;
                }
            }
            Route::Clients => {
                if let Some(command) = self.clients.refresh() {
                    drive(api, &mut self.clients, command).await;
                }
            }
            Route::Dashboard => {
                if let Some(command) = self.dashboard.refresh() {
                    drive(api, &mut self.dashboard, command).await;
                }
            }
        }
        self.render()
    }

    // endregion: --- Navigation

    // region:    --- Auth

    async fn login(&mut self, email: Option<String>, password: Option<Password>) -> io::Result<()> {
        let email = match email {
            Some(email) => email,
            None => {
                let current = self.login.email.clone();
                match self.prompt("Email", &current).await? {
                    Some(email) => email,
                    None => return Ok(()),
                }
            }
        };
        let password = match password {
            Some(Password(password)) => password,
            None => match self.prompt(PASSWORD_PROMPT, "").await? {
                Some(password) => password,
                None => return Ok(()),
            },
        };

        self.login.email = email;
        self.login.password = password;
        let Some(command) = self.login.submit() else {
            return Ok(());
        };
        drive(self.api, &mut self.login, command).await;

        if let Some(error) = self.login.error() {
            writeln!(self.out, "✗ {error}")?;
        }
        if let Some(route) = self.login.take_redirect() {
            writeln!(self.out, "Signed in as {}.", self.login.email)?;
            self.navigate(route).await?;
        }
        Ok(())
    }

    fn logout(&mut self) -> io::Result<()> {
        self.session.logout();
        self.login = LoginView::new(self.session.clone());
        self.leads = LeadsView::new();
        self.clients = ClientsView::new();
        self.dashboard = DashboardView::new();
        self.route = Route::Login;
        writeln!(self.out, "Signed out.")
    }

    // endregion: --- Auth

    // region:    --- Lead Form

    async fn new_lead(&mut self) -> io::Result<()> {
        if self.leads.is_editing() {
            self.leads.cancel_edit();
        }
        if !self.fill_form(false).await? {
            return writeln!(self.out, "Cancelled.");
        }
        self.submit_form().await
    }

    async fn edit_lead(&mut self, id: LeadId) -> io::Result<()> {
        if !self.leads.start_edit(id) {
            return writeln!(self.out, "Lead {id} is not in the list. Try `refresh`.");
        }
        writeln!(self.out, "Editing lead {id}. Press Enter to keep a value.")?;
        if !self.fill_form(true).await? {
            self.leads.cancel_edit();
            return writeln!(self.out, "Cancelled.");
        }
        if let Some(changed) = self.leads.pending_changes().filter(|c| !c.is_empty()) {
            writeln!(self.out, "Changing: {}", changed.join(", "))?;
        }
        self.submit_form().await
    }

    /// Prompt for each field, pre-filled with the current form value. Returns
    /// false if input ended mid-way.
    async fn fill_form(&mut self, with_status: bool) -> io::Result<bool> {
        for (field, label) in [
            (LeadField::Name, "Name"),
            (LeadField::Email, "Email"),
            (LeadField::Phone, "Phone"),
        ] {
            let current = field_value(self.leads.form(), field);
            let Some(mut value) = self.prompt(label, &current).await? else {
                return Ok(false);
            };
            if field == LeadField::Phone && value == CLEAR_VALUE {
                value.clear();
            }
            self.leads.set_field(field, &value);
        }

        if with_status {
            let current = self.leads.form().status;
            let options: Vec<&str> = LeadStatus::ALL.iter().map(|s| s.as_str()).collect();
            let label = format!("Status ({})", options.join("/"));
            let Some(value) = self.prompt(&label, current.as_str()).await? else {
                return Ok(false);
            };
            if value.parse::<LeadStatus>().is_err() {
                writeln!(self.out, "Unknown status `{value}`, keeping {current}.")?;
            }
            self.leads.set_field(LeadField::Status, &value);
        }
        Ok(true)
    }

    async fn submit_form(&mut self) -> io::Result<()> {
        match self.leads.submit() {
            Some(command) => {
                drive(self.api, &mut self.leads, command).await;
                self.render_leads()
            }
            None => {
                for line in render::field_errors(self.leads.errors()) {
                    writeln!(self.out, "{line}")?;
                }
                for line in render::banners(self.leads.message(), self.leads.error()) {
                    writeln!(self.out, "{line}")?;
                }
                Ok(())
            }
        }
    }

    /// Read one answer. Blank input keeps `current`; `None` at end of input.
    async fn prompt(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        if current.is_empty() {
            write!(self.out, "{label}: ")?;
        } else {
            write!(self.out, "{label} [{current}]: ")?;
        }
        self.out.flush()?;

        let Some(line) = self.input.next_line().await? else {
            writeln!(self.out)?;
            return Ok(None);
        };
        let answer = line.trim();
        Ok(Some(if answer.is_empty() {
            current.to_string()
        } else {
            answer.to_string()
        }))
    }

    // endregion: --- Lead Form

    // region:    --- Rendering

    fn render(&mut self) -> io::Result<()> {
        match self.route {
            Route::Login => writeln!(self.out, "Not signed in. Use `login <email> <password>`."),
            Route::Leads => self.render_leads(),
            Route::Clients => self.render_clients(),
            Route::Dashboard => self.render_dashboard(),
        }
    }

    fn render_leads(&mut self) -> io::Result<()> {
        let view = &self.leads;
        let out = &mut self.out;

        for line in render::banners(view.message(), view.error()) {
            writeln!(out, "{line}")?;
        }
        if view.is_loading() {
            return writeln!(out, "Loading...");
        }

        let visible = view.visible();
        if view.leads().is_empty() {
            writeln!(out, "No leads yet. Use `new` to add one.")?;
        } else if visible.is_empty() {
            writeln!(out, "No leads match the current filters.")?;
        } else {
            writeln!(out, "{}", render::leads_table(&visible))?;
        }

        if !view.search().trim().is_empty() || view.status_filter() != Default::default() {
            writeln!(
                out,
                "Showing {} of {} (search: {:?}, status: {})",
                visible.len(),
                view.leads().len(),
                view.search().trim(),
                view.status_filter().label()
            )?;
        }
        Ok(())
    }

    fn render_clients(&mut self) -> io::Result<()> {
        let view = &self.clients;
        let out = &mut self.out;

        for line in render::banners(None, view.error()) {
            writeln!(out, "{line}")?;
        }
        if view.is_loading() {
            writeln!(out, "Loading...")
        } else if view.clients().is_empty() {
            writeln!(out, "No clients yet. Convert a lead to create one.")
        } else {
            writeln!(out, "{}", render::clients_table(view.clients()))
        }
    }

    fn render_dashboard(&mut self) -> io::Result<()> {
        match self.dashboard.state() {
            DashboardState::Loading => writeln!(self.out, "Loading..."),
            DashboardState::Failed(error) => writeln!(self.out, "✗ {error}"),
            DashboardState::Ready(stats) => {
                let cards = lib_core::views::stat_cards(stats);
                writeln!(self.out, "{}", render::stat_cards_table(&cards))
            }
        }
    }

    // endregion: --- Rendering
}

fn field_value(form: &LeadForm, field: LeadField) -> String {
    match field {
        LeadField::Name => form.name.clone(),
        LeadField::Email => form.email.clone(),
        LeadField::Phone => form.phone.clone(),
        LeadField::Status => form.status.to_string(),
    }
}
