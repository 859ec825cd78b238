use crate::domain::{credential, BackendError};
use crate::interface_adapters::state::AppState;
use crate::use_cases::proxy::{CookieAction, InboundRequest, ProxyUseCase};
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{HeaderValue, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

#[tracing::instrument(
    name = "proxy",
    skip_all,
    fields(method = %method, path = %path)
)]
pub async fn proxy(
    State(state): State<Arc<AppState>>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Read the session cookie at call time; the gateway caches nothing.
    let cookie_token = headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(credential::token_from_cookie_header);

    let inbound = InboundRequest {
        method,
        path,
        query,
        cookie_token,
        body: if body.is_empty() {
            None
        } else {
            Some(body.to_vec())
        },
    };

    let use_case = ProxyUseCase {
        backend: state.backend.clone(),
    };

    let outcome = match use_case.execute(inbound).await {
        Ok(outcome) => outcome,
        Err(BackendError::Transport(reason)) => {
            tracing::error!(%reason, "failed to reach backend.");
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "backend unreachable"})),
            )
                .into_response();
        }
    };

    let set_cookie = match outcome.cookie {
        CookieAction::None => None,
        CookieAction::Set(token) => Some(credential::mint_cookie(&token, state.secure_cookies)),
        CookieAction::Clear => Some(credential::clear_cookie(state.secure_cookies)),
    };

    let mut response = (outcome.status, Json(outcome.body)).into_response();
    if let Some(value) = set_cookie {
        match HeaderValue::from_str(&value) {
            Ok(header) => {
                response.headers_mut().insert(SET_COOKIE, header);
            }
            Err(error) => {
                tracing::warn!(%error, "dropping unencodable set-cookie value.");
            }
        }
    }

    response
}

// Liveness probe, outside the proxied /api surface.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
