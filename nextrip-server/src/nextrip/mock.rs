//! Stand-in NexTrip server for tests.
//!
//! Serves one canned response for every path on a local port and records
//! each request it receives, so tests can exercise the real HTTP client.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::IntoResponse;

/// A request seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub accept: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<String>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local HTTP server answering every request with the same status and body.
pub struct MockNexTrip {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    server: tokio::task::JoinHandle<()>,
}

impl MockNexTrip {
    /// Start serving `body` with `status` on an ephemeral port.
    pub async fn start(status: u16, body: String) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: Arc::new(body),
            requests: requests.clone(),
        };

        let app = Router::new().fallback(respond).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener address");

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            requests,
            server,
        }
    }

    /// Base URL to point a `NexTripClient` at.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }
}

impl Drop for MockNexTrip {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn respond(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state
        .requests
        .lock()
        .expect("mock lock poisoned")
        .push(RecordedRequest {
            path: uri.path().to_string(),
            accept,
        });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_str().to_string(),
    )
}
