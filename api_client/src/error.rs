use crate::validate::ValidationError;
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;

// Error field the backend uses on every non-2xx response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub enum ClientError {
    // Rejected client-side; no network call was made.
    Invalid(ValidationError),
    // Network failure; no retry, the user retries manually.
    Transport(reqwest::Error),
    // A 2xx response whose body did not parse as the expected shape.
    Decode(serde_json::Error),
    // Non-2xx backend response, normalized to message + status.
    Api { status: StatusCode, message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Invalid(err) => write!(f, "invalid input: {err}"),
            ClientError::Transport(err) => write!(f, "transport error: {err}"),
            ClientError::Decode(err) => write!(f, "response decode error: {err}"),
            ClientError::Api { status, message } => {
                write!(f, "api error {status}: {message}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Invalid(err)
    }
}

// Normalizes a non-2xx response into the uniform error. The message comes
// from the body's `error` field; an unparsable or alien body falls back to
// a generic status-coded message, never a secondary decode error.
pub fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|payload| payload.error)
        .unwrap_or_else(|| format!("HTTP Error: {}", status.as_u16()));

    ClientError::Api { status, message }
}
