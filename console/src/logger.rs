//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ConsoleConfig;

pub const LOG_FILE_NAME: &str = "crm-console.log";

/// Initialize the logging system.
///
/// Writes to `<log_dir>/crm-console.log.<date>` through a non-blocking
/// appender; stdout stays free for the shell. Keep the returned guard alive for
/// the life of the program or buffered lines are lost on exit.
pub fn init(config: &ConsoleConfig) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("crm_console=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: A global tracing subscriber is already set");
    }

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        api_url = %config.api_url,
        "Logging initialized"
    );

    setup_panic_hook();
    Some(guard)
}

/// Log panics to the file before the default hook prints them.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!(location = %location, message = %message, "Application panic");
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        default_panic(panic_info);
    }));
}
