//! Tri-state result of a single asynchronous read.
//!
//! `FetchState` only ever changes through [`FetchState::transition`], which
//! consumes the old state and an event and returns the next one. The UI hook
//! stores the state in a signal; everything here is renderer-agnostic.

use crate::api::{ApiClient, FetchError};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Pending
    }
}

/// Outcome of the read, posted back to the owner of the state
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent<T> {
    Resolved(Vec<T>),
    Rejected(String),
}

impl<T> From<Result<Vec<T>, FetchError>> for FetchEvent<T> {
    fn from(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(records) => FetchEvent::Resolved(records),
            Err(e) => FetchEvent::Rejected(e.to_string()),
        }
    }
}

impl<T> FetchState<T> {
    /// Apply an event. Only a pending read can settle; once settled the
    /// state is terminal for this mount and later events are ignored.
    pub fn transition(self, event: FetchEvent<T>) -> Self {
        match (self, event) {
            (FetchState::Pending, FetchEvent::Resolved(records)) => FetchState::Ready(records),
            (FetchState::Pending, FetchEvent::Rejected(reason)) => FetchState::Failed(reason),
            (settled, _) => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// Loaded records, or an empty slice while pending or after a failure
    pub fn data(&self) -> &[T] {
        match self {
            FetchState::Ready(records) => records,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Perform the GET for `url` and turn the outcome into a [`FetchEvent`].
pub async fn resolve<T: DeserializeOwned>(client: &ApiClient, url: &str) -> FetchEvent<T> {
    let result = client.get_json::<Vec<T>>(url).await;
    match &result {
        Ok(records) => info!("Loaded {} records from {}", records.len(), url),
        Err(e) => warn!("Request to {} failed: {}", url, e),
    }
    result.into()
}
