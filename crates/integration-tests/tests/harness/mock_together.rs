//! Mock Together AI backend for integration tests
//!
//! Implements the image generation endpoint with canned responses and
//! records the request bodies it receives so tests can assert on the
//! parameters the gateway forwards

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Base64 payload returned by the mock for every generated image
pub const MOCK_B64_IMAGE: &str = "aGVsbG8gYmxpbmtzaG90";

/// Mock Together backend with request capture
pub struct MockTogether {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    request_count: AtomicU32,
    /// When set, every request answers with this status and message
    error: Option<(u16, String)>,
    /// Most recent request body, for forwarded-parameter assertions
    last_request: Mutex<Option<serde_json::Value>>,
}

impl MockTogether {
    /// Start a mock that answers every request with one base64 image
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock that fails every request with the given status and
    /// error message
    pub async fn start_with_error(status: u16, message: &str) -> anyhow::Result<Self> {
        Self::start_inner(Some((status, message.to_owned()))).await
    }

    async fn start_inner(error: Option<(u16, String)>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            request_count: AtomicU32::new(0),
            error,
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/images/generations", routing::post(handle_generations))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the provider backend
    ///
    /// Includes `/v1` since the client appends `/images/generations`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of generation requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent generation request, if any
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockTogether {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generations(
    State(state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_request.lock().unwrap() = Some(body.clone());

    if let Some((status, message)) = &state.error {
        return (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(serde_json::json!({
                "error": {
                    "message": message,
                    "type": "invalid_request_error"
                }
            })),
        )
            .into_response();
    }

    let response = serde_json::json!({
        "id": "img-test-123",
        "model": body["model"],
        "object": "list",
        "data": [
            {
                "index": 0,
                "b64_json": MOCK_B64_IMAGE
            }
        ]
    });

    Json(response).into_response()
}
