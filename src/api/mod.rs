pub mod client;
pub mod models;

pub use client::{ApiClient, FetchError};
pub use models::User;
