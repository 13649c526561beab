use std::process::ExitCode;
use std::sync::Arc;

use crm_console::{logger, ApiClient, ConsoleConfig, FileTokenStore, Shell};
use lib_core::AuthSession;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ConsoleConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = logger::init(&config);

    let session = AuthSession::new(Arc::new(FileTokenStore::new(&config.token_file)));
    let api = match ApiClient::from_config(&config, session.clone()) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create API client");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut shell = Shell::new(&api, session, stdin, std::io::stdout());
    if let Err(e) = shell.run().await {
        tracing::error!(error = %e, "Shell I/O failed");
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
