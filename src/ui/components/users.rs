use crate::api::User;
use crate::ui::components::fetch_hooks::use_api_request;
use crate::ui::use_config;
use crate::users::{UserRow, UsersView};
use dioxus::prelude::*;
use tracing::debug;

/// Users page: fetched list filtered by a search box
#[component]
pub fn Users() -> Element {
    debug!("Rendering users page");
    let config = use_config();
    let users = use_api_request::<User>(config.users_url);
    let mut search_term = use_signal(String::new);

    let view = UsersView::derive(&users.read(), &search_term.read());

    rsx! {
        h2 { "Users" }
        input {
            r#type: "text",
            placeholder: "Search by name",
            value: "{search_term}",
            oninput: move |event| search_term.set(event.value()),
        }
        {
            match view {
                UsersView::Loading => rsx! {
                    p { class: "status", "Loading..." }
                },
                UsersView::Failed(reason) => rsx! {
                    p { class: "error", "Error: {reason}" }
                },
                UsersView::Rows(rows) => rsx! {
                    UserList { rows }
                },
            }
        }
    }
}

#[component]
fn UserList(rows: Vec<UserRow>) -> Element {
    rsx! {
        ul { class: "user-list",
            for row in rows {
                li { key: "{row.key}", "{row.label}" }
            }
        }
    }
}
