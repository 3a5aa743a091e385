use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        h2 { "About" }
    }
}
