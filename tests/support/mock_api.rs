//! Mock users API served over real HTTP on an ephemeral port.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Response, StatusCode};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Canned response returned for every request
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error": "mock failure"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    response: MockResponse,
    hits: Arc<AtomicUsize>,
}

pub struct MockApi {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl MockApi {
    pub async fn start(response: MockResponse) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            response,
            hits: hits.clone(),
        };

        let app = Router::new()
            .route("/users", get(handle_users))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, hits, handle }
    }

    pub fn users_url(&self) -> String {
        format!("http://{}/users", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_users(State(state): State<MockState>) -> Response<Body> {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if state.response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.response.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(state.response.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(state.response.body.clone()))
        .unwrap()
}

/// An address nothing is listening on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/users", addr)
}
