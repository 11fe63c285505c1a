//! Form server - Main entry point
//!
//! Serves the title/phone/mail form over HTTP and validates submissions
//! against the patterns configured in the environment.

use anyhow::Result;
use regex_form_server::{Config, FormField, FormServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr); RUST_LOG wins over LOG_LEVEL
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        title = config.patterns.pattern(FormField::Title).as_str(),
        phone = config.patterns.pattern(FormField::Phone).as_str(),
        mail = config.patterns.pattern(FormField::Mail).as_str(),
        "Field patterns"
    );

    let server = FormServer::bind(&config).await?;
    let metrics = server.metrics().clone();
    info!("Form server listening on http://{}", server.local_addr()?);

    server.run_until(shutdown_signal()).await;

    info!("Metrics summary: {}", serde_json::to_string(&metrics.summary())?);
    info!("Form server shutdown complete");
    Ok(())
}

/// Resolve when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
