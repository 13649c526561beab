//! Shell command parsing.

use std::fmt;
use std::str::FromStr;

use lib_core::views::StatusFilter;
use lib_core::Route;
use shared::LeadId;

pub const HELP: &str = "\
Commands:
  login [email] [password]   sign in (missing values are prompted; the
                             password is echoed as typed)
  logout                     sign out and forget the saved token
  open <page>                go to leads, clients, dashboard or login
  leads | clients | dashboard
  refresh                    reload the current page
  search [text]              filter leads by name or email (empty clears)
  filter <status|all>        filter leads by status
  new                        create a lead
  edit <id>                  edit a lead (Enter keeps a value, `-` clears the phone)
  cancel                     leave edit mode and clear the form
  delete <id>                delete a lead
  convert <id>               convert a lead into a client
  help                       show this list
  quit                       exit";

/// Password typed on the command line; never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(pub String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login {
        email: Option<String>,
        password: Option<Password>,
    },
    Logout,
    Open(Route),
    Refresh,
    Search(String),
    Filter(StatusFilter),
    New,
    Edit(LeadId),
    Cancel,
    Delete(LeadId),
    Convert(LeadId),
    Help,
    Quit,
}

impl ShellCommand {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            ShellCommand::Login { .. } => "login",
            ShellCommand::Logout => "logout",
            ShellCommand::Open(_) => "open",
            ShellCommand::Refresh => "refresh",
            ShellCommand::Search(_) => "search",
            ShellCommand::Filter(_) => "filter",
            ShellCommand::New => "new",
            ShellCommand::Edit(_) => "edit",
            ShellCommand::Cancel => "cancel",
            ShellCommand::Delete(_) => "delete",
            ShellCommand::Convert(_) => "convert",
            ShellCommand::Help => "help",
            ShellCommand::Quit => "quit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command `{0}`. Type `help` for the list.")]
    Unknown(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{0}` is not a lead id")]
    BadId(String),

    #[error("Unknown status `{0}`")]
    BadStatus(String),

    #[error("Unknown page `{0}`")]
    UnknownRoute(String),
}

impl FromStr for ShellCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "login" => {
                let (email, password) = match rest.split_once(char::is_whitespace) {
                    Some((email, password)) => (Some(email), Some(password.trim())),
                    None => ((!rest.is_empty()).then_some(rest), None),
                };
                ShellCommand::Login {
                    email: email.map(str::to_string),
                    password: password
                        .filter(|p| !p.is_empty())
                        .map(|p| Password(p.to_string())),
                }
            }
            "logout" => ShellCommand::Logout,
            "open" | "go" => ShellCommand::Open(parse_route(rest)?),
            "leads" => ShellCommand::Open(Route::Leads),
            "clients" => ShellCommand::Open(Route::Clients),
            "dashboard" | "stats" => ShellCommand::Open(Route::Dashboard),
            "refresh" | "reload" => ShellCommand::Refresh,
            "search" => ShellCommand::Search(rest.to_string()),
            "filter" => {
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "filter",
                        argument: "a status or `all`",
                    });
                }
                let filter = rest
                    .parse()
                    .map_err(|_| ParseError::BadStatus(rest.to_string()))?;
                ShellCommand::Filter(filter)
            }
            "new" | "add" => ShellCommand::New,
            "edit" => ShellCommand::Edit(parse_id("edit", rest)?),
            "cancel" => ShellCommand::Cancel,
            "delete" | "rm" => ShellCommand::Delete(parse_id("delete", rest)?),
            "convert" => ShellCommand::Convert(parse_id("convert", rest)?),
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => return Err(ParseError::Unknown(head.to_string())),
        };
        Ok(command)
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<LeadId, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            argument: "a lead id",
        });
    }
    arg.parse().map_err(|_| ParseError::BadId(arg.to_string()))
}

/// Accepts `leads`, `/leads` or `/`.
fn parse_route(arg: &str) -> Result<Route, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument {
            command: "open",
            argument: "a page (leads, clients, dashboard, login)",
        });
    }
    let path = arg.to_ascii_lowercase();
    let path = if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    };
    Route::from_path(&path).ok_or_else(|| ParseError::UnknownRoute(arg.to_string()))
}
