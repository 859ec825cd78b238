use std::{env, time::Duration};

// Runtime/server configuration, all env-driven with defaults.

pub fn http_port() -> u16 {
    env::var("GATEWAY_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000)
}

pub fn backend_url() -> String {
    env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

pub fn backend_timeout() -> Duration {
    let millis = env::var("BACKEND_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}

// Cookies only carry the Secure attribute in production.
pub fn secure_cookies() -> bool {
    matches!(env::var("APP_ENV").as_deref(), Ok("production"))
}
