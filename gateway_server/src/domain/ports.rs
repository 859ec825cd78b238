use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use serde_json::Value;
use std::fmt;

// The http types within this layer are a dependency leak, but its a pragmatic approach
// Request the gateway forwards to the backend API.
pub struct ProxiedRequest {
    pub method: Method,
    // Wildcard segments already joined with `/`, no leading slash.
    pub path: String,
    // Original query string, without the `?`.
    pub query: Option<String>,
    // Session token lifted out of the browser cookie, if any.
    pub bearer_token: Option<String>,
    // Raw body text; never parsed by the gateway.
    pub body: Option<Vec<u8>>,
}

// Backend response after the JSON-or-empty-object decode step.
pub struct BackendReply {
    pub status: StatusCode,
    pub body: Value,
}

#[derive(Debug)]
pub enum BackendError {
    // Network failure reaching the backend; surfaced to the caller as 502.
    Transport(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Transport(reason) => write!(f, "backend transport error: {reason}"),
        }
    }
}

impl std::error::Error for BackendError {}

// The handler depends on this trait, not the concrete client implementation.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait BackendPort: Send + Sync {
    async fn forward(&self, req: ProxiedRequest) -> Result<BackendReply, BackendError>;
}

// Lets the shared Arc<dyn BackendPort> from AppState drive the use case.
#[async_trait]
impl<T> BackendPort for std::sync::Arc<T>
where
    T: BackendPort + ?Sized,
{
    async fn forward(&self, req: ProxiedRequest) -> Result<BackendReply, BackendError> {
        (**self).forward(req).await
    }
}
