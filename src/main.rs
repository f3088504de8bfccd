use mindnest::adapters::FileStorage;
use mindnest::api::ApiClient;
use mindnest::cli::{parse_args, run_cli_command, run_offline_command, CliContext};
use mindnest::config::AppConfig;
use mindnest::preferences::Preferences;
use mindnest::traits::KeyValueStore;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log to stderr so command output on stdout stays clean.
///
/// Precedence: RUST_LOG env var > default "mindnest=warn"
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "mindnest=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(result) = run_offline_command(&command) {
        return result;
    }

    init_logging();

    let config = AppConfig::from_env();
    let path = config
        .storage_path()
        .ok_or_else(|| eyre!("Cannot determine a data directory; set MINDNEST_HOME"))?;
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStorage::with_path(path));
    info!(
        base_url = %config.base_url(),
        environment = ?config.environment,
        "Starting MindNest"
    );

    let api = ApiClient::from_config(&config, store.clone())?;
    let preferences = Preferences::load(store).await.shared();
    run_cli_command(command, &CliContext { api, preferences }).await
}
