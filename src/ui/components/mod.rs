pub mod about;
pub mod app;
pub mod fetch_hooks;
pub mod home;
pub mod navbar;
pub mod not_found;
pub mod theme_context;
pub mod users;

pub use about::About;
pub use app::App;
pub use fetch_hooks::{use_api_client, use_api_request};
pub use home::Home;
pub use navbar::Navbar;
pub use not_found::PageNotFound;
pub use theme_context::{use_theme, ThemeProvider, ThemeState};
pub use users::Users;
