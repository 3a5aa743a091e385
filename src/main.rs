use tracing::{error, info};
use userbook::config::Config;
use userbook::ui::{make_config, App};
use userbook::AppContext;

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

    info!("Starting {}", config.window_title);

    dioxus::LaunchBuilder::new()
        .with_cfg(make_config(&config.window_title))
        .with_context(AppContext::new(config))
        .launch(App);
}
