use crate::domain::{
    classify, BackendError, BackendPort, BackendReply, ProxiedRequest, RouteClass,
};
use axum::http::{Method, StatusCode};
use serde_json::Value;

// Request as seen on the browser leg, before credential translation.
pub struct InboundRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    // Token read from the session cookie, if the browser sent one.
    pub cookie_token: Option<String>,
    pub body: Option<Vec<u8>>,
}

// Cookie mutation requested alongside the response. The only persistent
// side effect the gateway ever produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieAction {
    None,
    Set(String),
    Clear,
}

pub struct ProxyOutcome {
    pub status: StatusCode,
    pub body: Value,
    pub cookie: CookieAction,
}

// Proxy use case with the backend injected behind its port.
pub struct ProxyUseCase<B> {
    pub backend: B,
}

impl<B> ProxyUseCase<B>
where
    B: BackendPort,
{
    pub async fn execute(&self, req: InboundRequest) -> Result<ProxyOutcome, BackendError> {
        // Bodies only travel on verbs that may carry one.
        let body = if req.method == Method::GET || req.method == Method::HEAD {
            None
        } else {
            req.body
        };

        let reply = self
            .backend
            .forward(ProxiedRequest {
                method: req.method,
                path: req.path.clone(),
                query: req.query,
                bearer_token: req.cookie_token,
                body,
            })
            .await?;

        // Cookie transitions only happen on successful backend responses.
        if reply.status.is_success() {
            match classify(&req.path) {
                RouteClass::CredentialMint => return Ok(mint_outcome(reply)),
                RouteClass::CredentialClear => {
                    return Ok(ProxyOutcome {
                        status: reply.status,
                        body: reply.body,
                        cookie: CookieAction::Clear,
                    });
                }
                RouteClass::Passthrough => {}
            }
        }

        Ok(ProxyOutcome {
            status: reply.status,
            body: reply.body,
            cookie: CookieAction::None,
        })
    }
}

// Strips a string-valued `token` field out of the login/signup body and turns
// it into a cookie. The raw token must never reach page-level script, so the
// browser-visible body loses the field entirely.
fn mint_outcome(reply: BackendReply) -> ProxyOutcome {
    let BackendReply { status, body } = reply;

    if let Value::Object(mut map) = body {
        if let Some(Value::String(token)) = map.get("token").cloned() {
            map.remove("token");
            return ProxyOutcome {
                status,
                body: Value::Object(map),
                cookie: CookieAction::Set(token),
            };
        }
        // Missing or non-string token: plain passthrough, nothing to mint.
        return ProxyOutcome {
            status,
            body: Value::Object(map),
            cookie: CookieAction::None,
        };
    }

    ProxyOutcome {
        status,
        body,
        cookie: CookieAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    // Minimal fake backend that records forwarded requests and replays a
    // scripted reply.
    #[derive(Clone)]
    struct ScriptedBackend {
        status: StatusCode,
        body: Value,
        seen: Arc<Mutex<Vec<ProxiedRequest>>>,
    }

    impl ScriptedBackend {
        fn replying(status: StatusCode, body: Value) -> Self {
            Self {
                status,
                body,
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl BackendPort for ScriptedBackend {
        async fn forward(&self, req: ProxiedRequest) -> Result<BackendReply, BackendError> {
            let mut guard = self.seen.lock().expect("seen mutex poisoned");
            guard.push(req);
            Ok(BackendReply {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    fn inbound(method: Method, path: &str) -> InboundRequest {
        InboundRequest {
            method,
            path: path.to_string(),
            query: None,
            cookie_token: None,
            body: None,
        }
    }

    #[tokio::test]
    async fn when_login_succeeds_then_token_is_stripped_and_cookie_is_minted() {
        let backend = ScriptedBackend::replying(
            StatusCode::OK,
            json!({"message": "ok", "user": {"id": 1}, "token": "tok-1"}),
        );
        let use_case = ProxyUseCase { backend };

        let outcome = use_case
            .execute(inbound(Method::POST, "login"))
            .await
            .expect("expected proxy to succeed");

        assert_eq!(outcome.status, StatusCode::OK);
        assert_eq!(outcome.cookie, CookieAction::Set("tok-1".to_string()));
        assert!(outcome.body.get("token").is_none());
        assert_eq!(outcome.body["message"], "ok");
    }

    #[tokio::test]
    async fn when_signup_succeeds_then_cookie_is_minted_with_exact_token() {
        let backend = ScriptedBackend::replying(
            StatusCode::CREATED,
            json!({"message": "created", "user": {"id": 2}, "token": "tok-signup"}),
        );
        let use_case = ProxyUseCase { backend };

        let outcome = use_case
            .execute(inbound(Method::POST, "signup"))
            .await
            .expect("expected proxy to succeed");

        assert_eq!(outcome.status, StatusCode::CREATED);
        assert_eq!(
            outcome.cookie,
            CookieAction::Set("tok-signup".to_string())
        );
    }

    #[tokio::test]
    async fn when_login_fails_then_no_cookie_is_minted() {
        let backend = ScriptedBackend::replying(
            StatusCode::UNAUTHORIZED,
            json!({"error": "invalid credentials", "token": "should-not-leak"}),
        );
        let use_case = ProxyUseCase { backend };

        let outcome = use_case
            .execute(inbound(Method::POST, "login"))
            .await
            .expect("expected proxy to succeed");

        // Non-2xx login is plain passthrough, body untouched.
        assert_eq!(outcome.status, StatusCode::UNAUTHORIZED);
        assert_eq!(outcome.cookie, CookieAction::None);
        assert_eq!(outcome.body["error"], "invalid credentials");
    }

    #[tokio::test]
    async fn when_login_token_is_not_a_string_then_body_passes_through_unchanged() {
        let backend =
            ScriptedBackend::replying(StatusCode::OK, json!({"message": "ok", "token": 42}));
        let use_case = ProxyUseCase { backend };

        let outcome = use_case
            .execute(inbound(Method::POST, "login"))
            .await
            .expect("expected proxy to succeed");

        assert_eq!(outcome.cookie, CookieAction::None);
        assert_eq!(outcome.body["token"], 42);
    }

    #[tokio::test]
    async fn when_logout_succeeds_then_cookie_is_cleared_and_body_is_kept() {
        let backend =
            ScriptedBackend::replying(StatusCode::OK, json!({"message": "logged out"}));
        let use_case = ProxyUseCase { backend };

        let outcome = use_case
            .execute(inbound(Method::POST, "logout"))
            .await
            .expect("expected proxy to succeed");

        assert_eq!(outcome.cookie, CookieAction::Clear);
        assert_eq!(outcome.body["message"], "logged out");
    }

    #[tokio::test]
    async fn when_logout_fails_then_cookie_is_left_alone() {
        let backend = ScriptedBackend::replying(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "boom"}),
        );
        let use_case = ProxyUseCase { backend };

        let outcome = use_case
            .execute(inbound(Method::POST, "logout"))
            .await
            .expect("expected proxy to succeed");

        assert_eq!(outcome.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(outcome.cookie, CookieAction::None);
    }

    #[tokio::test]
    async fn when_path_is_passthrough_then_status_and_body_forward_unchanged() {
        let backend = ScriptedBackend::replying(
            StatusCode::NOT_FOUND,
            json!({"error": "no such anime"}),
        );
        let use_case = ProxyUseCase { backend };

        let outcome = use_case
            .execute(inbound(Method::GET, "animes/999"))
            .await
            .expect("expected proxy to succeed");

        assert_eq!(outcome.status, StatusCode::NOT_FOUND);
        assert_eq!(outcome.body["error"], "no such anime");
        assert_eq!(outcome.cookie, CookieAction::None);
    }

    #[tokio::test]
    async fn when_method_is_get_then_body_is_not_forwarded() {
        let backend = ScriptedBackend::replying(StatusCode::OK, json!({}));
        let seen = backend.seen.clone();
        let use_case = ProxyUseCase { backend };

        let mut req = inbound(Method::GET, "animes");
        req.body = Some(b"ignored".to_vec());
        use_case
            .execute(req)
            .await
            .expect("expected proxy to succeed");

        let guard = seen.lock().expect("seen mutex poisoned");
        assert!(guard[0].body.is_none());
    }

    #[tokio::test]
    async fn when_method_is_head_then_body_is_not_forwarded() {
        let backend = ScriptedBackend::replying(StatusCode::OK, json!({}));
        let seen = backend.seen.clone();
        let use_case = ProxyUseCase { backend };

        let mut req = inbound(Method::HEAD, "animes");
        req.body = Some(b"ignored".to_vec());
        use_case
            .execute(req)
            .await
            .expect("expected proxy to succeed");

        let guard = seen.lock().expect("seen mutex poisoned");
        assert_eq!(guard[0].method, Method::HEAD);
        assert!(guard[0].body.is_none());
    }

    #[tokio::test]
    async fn when_method_is_post_then_body_and_token_are_forwarded() {
        let backend = ScriptedBackend::replying(StatusCode::OK, json!({}));
        let seen = backend.seen.clone();
        let use_case = ProxyUseCase { backend };

        let mut req = inbound(Method::POST, "reviews");
        req.body = Some(b"{\"score\":85}".to_vec());
        req.cookie_token = Some("tok-5".to_string());
        req.query = Some("anime_id=3".to_string());
        use_case
            .execute(req)
            .await
            .expect("expected proxy to succeed");

        let guard = seen.lock().expect("seen mutex poisoned");
        assert_eq!(guard[0].body.as_deref(), Some(b"{\"score\":85}".as_ref()));
        assert_eq!(guard[0].bearer_token.as_deref(), Some("tok-5"));
        assert_eq!(guard[0].query.as_deref(), Some("anime_id=3"));
    }

    #[tokio::test]
    async fn when_backend_fails_then_transport_error_propagates() {
        struct FailingBackend;

        #[async_trait]
        impl BackendPort for FailingBackend {
            async fn forward(
                &self,
                _req: ProxiedRequest,
            ) -> Result<BackendReply, BackendError> {
                Err(BackendError::Transport("connection refused".to_string()))
            }
        }

        let use_case = ProxyUseCase {
            backend: FailingBackend,
        };

        let result = use_case.execute(inbound(Method::GET, "animes")).await;

        assert!(matches!(result, Err(BackendError::Transport(_))));
    }
}
