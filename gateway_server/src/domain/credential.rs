// Pure mapping between the two credential representations: the httpOnly
// session cookie on the browser leg and the bearer header on the backend leg.
// No transport types here so the codec is testable in isolation.

// Cookie carrying the session token between browser and gateway.
pub const COOKIE_NAME: &str = "auth_token";

// Session lifetime for the cookie (in seconds).
pub const COOKIE_MAX_AGE_SECONDS: u64 = 60 * 60 * 24;

// Extracts the session token from a raw `Cookie` request header value.
pub fn token_from_cookie_header(header: &str) -> Option<String> {
    let prefix = format!("{COOKIE_NAME}=");
    for part in header.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(&prefix) {
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

// `Set-Cookie` value that installs the session token.
pub fn mint_cookie(token: &str, secure: bool) -> String {
    set_cookie_value(token, COOKIE_MAX_AGE_SECONDS, secure)
}

// `Set-Cookie` value that removes the session token.
pub fn clear_cookie(secure: bool) -> String {
    set_cookie_value("", 0, secure)
}

fn set_cookie_value(token: &str, max_age: u64, secure: bool) -> String {
    if secure {
        format!("{COOKIE_NAME}={token}; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age={max_age}")
    } else {
        format!("{COOKIE_NAME}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}")
    }
}

// Backend-leg representation of the same credential.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}
