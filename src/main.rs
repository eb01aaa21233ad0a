// 3rd party crates
use tokio::signal::ctrl_c;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use crpt_client::functions::run;
use crpt_client::settings::ConfigManager;

/// Main entry point for the document submission client.
/// This application submits product documents to the CRPT API while keeping
/// the request rate under the configured limit.
///
/// Features:
/// - Client-side rate limiting shared by all concurrent submissions
/// - Concurrent submission of multiple document copies
/// - Configurable rate limit period and request limit
/// - Graceful shutdown on Ctrl+C
/// - Detailed logging
#[tokio::main]
async fn main() {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let config: ConfigManager = ConfigManager::new().expect("Failed to initialize configuration");

    // setup logging.
    let log_level: String = config.get_log_level();

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(log_level)
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    info!("⚙️ Settings have been loaded from {:?}.", config.config_path);

    // Create a broadcast channel for shutdown signal
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let shutdown_tx_clone = shutdown_tx.clone();

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, cancelling pending submissions...");
        let _ = shutdown_tx_clone.send(());
    });

    // Run the main application logic with shutdown signal
    match run(config.get_settings(), shutdown_rx).await {
        Ok(metrics) if metrics.failures() > 0 => {
            error!(
                "{} of {} submissions failed",
                metrics.failures(),
                metrics.attempts
            );
        }
        Ok(_) => {}
        Err(e) => {
            error!("Application error: {}", e);
        }
    }

    info!("Shutdown complete.");
}
