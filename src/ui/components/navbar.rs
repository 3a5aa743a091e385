use crate::ui::Route;
use dioxus::prelude::*;

use super::theme_context::use_theme;

/// Layout component: navigation bar above the routed page
#[component]
pub fn Navbar() -> Element {
    let mut theme = use_theme();

    rsx! {
        nav { class: "navbar", style: "{theme().nav_style()}",
            ul {
                li {
                    Link { to: Route::Home {}, "Home" }
                }
                li {
                    Link { to: Route::About {}, "About" }
                }
                li {
                    Link { to: Route::Users {}, "Users" }
                }
                li {
                    label {
                        input {
                            r#type: "checkbox",
                            checked: theme().is_dark(),
                            onchange: move |_| {
                                let next = theme().toggled();
                                theme.set(next);
                            },
                        }
                        "Dark Mode"
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}
