use crate::api::ApiClient;
use crate::fetch::{resolve, FetchState};
use crate::AppContext;
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Hook to access the shared HTTP client
pub fn use_api_client() -> ApiClient {
    let context = use_context::<AppContext>();
    context.api_client.clone()
}

/// Issue a single GET for `url` when the calling component mounts and
/// expose the result as a signal that starts out `Pending`.
///
/// The request runs on the component's scope, so it is dropped if the
/// component unmounts before the response arrives.
pub fn use_api_request<T>(url: String) -> Signal<FetchState<T>>
where
    T: DeserializeOwned + Clone + 'static,
{
    let client = use_api_client();
    let mut state = use_signal(FetchState::<T>::default);

    use_effect(move || {
        debug!("Starting request effect for {}", url);
        let client = client.clone();
        let url = url.clone();
        spawn(async move {
            let event = resolve::<T>(&client, &url).await;
            let next = state.peek().clone().transition(event);
            state.set(next);
        });
    });

    state
}
