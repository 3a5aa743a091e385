use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record as returned by the users endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    /// Remaining fields (email, address, company, ...) kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }
}
