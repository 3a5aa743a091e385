use crate::api::User;
use crate::fetch::FetchState;

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub key: u64,
    pub label: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            key: user.id,
            label: user.name.clone(),
        }
    }
}

/// What the users page shows for a given fetch state and search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersView {
    Loading,
    Failed(String),
    Rows(Vec<UserRow>),
}

impl UsersView {
    /// Recomputed on every render; nothing is cached between calls.
    pub fn derive(state: &FetchState<User>, search_term: &str) -> Self {
        match state {
            FetchState::Pending => UsersView::Loading,
            FetchState::Failed(reason) => UsersView::Failed(reason.clone()),
            FetchState::Ready(users) => UsersView::Rows(
                filter_users(users, search_term)
                    .map(UserRow::from)
                    .collect(),
            ),
        }
    }

    pub fn rows(&self) -> &[UserRow] {
        match self {
            UsersView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// Case-insensitive substring match on the user's name, preserving order.
/// An empty term matches everyone.
pub fn filter_users<'a>(
    users: &'a [User],
    search_term: &str,
) -> impl Iterator<Item = &'a User> + 'a {
    let needle = search_term.to_lowercase();
    users
        .iter()
        .filter(move |user| user.name.to_lowercase().contains(&needle))
}
