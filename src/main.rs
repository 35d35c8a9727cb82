//! SEED - Speculative Futures Platform
//!
//! Terminal entry point: loads configuration, routes logs to a file (the TUI
//! owns the terminal), and runs the event loop.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seedwheel::app::{self, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logging to a file; stdout belongs to the TUI
    std::fs::create_dir_all(&config.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "seedwheel.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seedwheel=info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    info!(
        data_dir = %config.data_dir.display(),
        api_url = config.api_url.as_deref().unwrap_or("-"),
        "starting SEED"
    );

    app::run(config).await
}
