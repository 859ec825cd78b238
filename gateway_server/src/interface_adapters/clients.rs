use crate::domain::{credential, BackendError, BackendPort, BackendReply, ProxiedRequest};
use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;

// The clients defined here are reqwest clients for the upstream backend API.
// Thin wrapper around reqwest implementing the gateway's backend port.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    pub base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl BackendPort for BackendClient {
    async fn forward(&self, req: ProxiedRequest) -> Result<BackendReply, BackendError> {
        // Compose the backend URL, preserving the original query string.
        let mut url = format!("{}/api/{}", self.base_url, req.path);
        if let Some(query) = &req.query {
            url.push('?');
            url.push_str(query);
        }

        // axum and reqwest may pin different http crate majors, so the
        // method crosses the boundary by value rather than by type.
        let method = reqwest::Method::from_bytes(req.method.as_str().as_bytes())
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &req.bearer_token {
            builder = builder.header(AUTHORIZATION, credential::bearer_value(token));
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let res = builder
            .send()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        let status = StatusCode::from_u16(res.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let bytes = res
            .bytes()
            .await
            .map_err(|err| BackendError::Transport(err.to_string()))?;

        Ok(BackendReply {
            status,
            body: decode_body(&bytes),
        })
    }
}

// Non-JSON backend bodies collapse to an empty object rather than a
// distinct error path.
fn decode_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}
