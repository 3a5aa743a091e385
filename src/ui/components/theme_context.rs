use crate::theme::Theme;
use dioxus::prelude::*;

/// Theme shared by the navigation bar and the page root
#[derive(Clone)]
pub struct ThemeState {
    pub theme: Signal<Theme>,
}

/// Provider component that owns the theme and paints the page with it
#[component]
pub fn ThemeProvider(initial: Theme, children: Element) -> Element {
    let theme = use_signal(|| initial);
    use_context_provider(|| ThemeState { theme });

    rsx! {
        div { class: "page", style: "{theme().page_style()}", {children} }
    }
}

/// Hook to access the current theme
pub fn use_theme() -> Signal<Theme> {
    let state = use_context::<ThemeState>();
    state.theme
}
