use dioxus::LaunchBuilder;
use maestro::config::{load_dotenv, log_filter};
use maestro::ui::{make_config, App};
use maestro::{CatalogClient, Config};
use tracing::{debug, error, info};

fn main() {
    // .env first, so a RUST_LOG set there applies to the subscriber
    let dotenv_loaded = load_dotenv();
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();

    if dotenv_loaded {
        info!("Dev mode activated - loaded .env file");
    } else {
        debug!("No .env file loaded");
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Using catalog API at {}", config.api_url);
    let client = CatalogClient::new(config.api_url);

    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(client)
        .launch(App);
}
