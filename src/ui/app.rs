use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/users")]
    Users {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

pub fn make_config(title: &str) -> DioxusConfig {
    DioxusConfig::default().with_window(make_window(title))
}

fn make_window(title: &str) -> WindowBuilder {
    WindowBuilder::new()
        .with_title(title)
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(900, 700))
}
