//! Helpdesk GUI Client - Main Entry Point

use helpdesk_gui::app::application::run_app;
use helpdesk_gui::helpers::get_or_create_config_dir;
use tracing_appender::non_blocking::WorkerGuard;

fn main() {
    // The guard must outlive the event loop so buffered log lines flush.
    let _log_guard = init_logging();

    tracing::info!("Starting Helpdesk GUI Client...");

    // Run the GPUI application
    run_app();
}

/// Initialize tracing with daily-rolled file logging under the config
/// directory, falling back to stderr when the directory is unavailable.
fn init_logging() -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match get_or_create_config_dir() {
        Ok(config_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(config_dir.join("logs"), "helpdesk-gui.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!(error = %err, "No config directory; logging to stderr");
            None
        }
    }
}
