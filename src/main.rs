use std::sync::Arc;
use tracing::{error, info};

use realty::api::ListingClient;
use realty::config::Config;
use realty::ui::{make_config, App};
use realty::AppContext;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match ListingClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create backend client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting realty against {}", client.base_url());

    let app_context = AppContext {
        config,
        backend: Arc::new(client),
    };

    dioxus::LaunchBuilder::new()
        .with_cfg(make_config())
        .with_context(app_context)
        .launch(App);
}
