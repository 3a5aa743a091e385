pub mod app;
pub mod app_context;
pub mod components;

pub use app::*;
pub use app_context::{use_config, AppContext};
pub use components::*;
