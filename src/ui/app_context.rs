use crate::api::ApiClient;
use crate::config::Config;
use dioxus::prelude::*;

/// Services handed to the UI at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub api_client: ApiClient,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            api_client: ApiClient::new(),
        }
    }
}

/// Hook to access the loaded configuration
pub fn use_config() -> Config {
    use_context::<AppContext>().config
}
