use crate::theme::Theme;
use crate::ui::{use_config, Route, MAIN_CSS};
use dioxus::prelude::*;
use tracing::debug;

use super::theme_context::ThemeProvider;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let config = use_config();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeProvider { initial: Theme::from_dark_mode(config.dark_mode),
            Router::<Route> {}
        }
    }
}
