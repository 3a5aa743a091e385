use crate::ui::Route;
use dioxus::prelude::*;

/// Fallback for any path that matches no route
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        h2 { "Page not found" }
        p { "Nothing lives at {path}." }
        Link { to: Route::Home {}, "Back to Home" }
    }
}
