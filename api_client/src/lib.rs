// Typed contract for the anime-review backend, called through the gateway.
// Page-level code holds an ApiClient plus a Session and never builds
// requests by hand.

pub mod client;
pub mod error;
pub mod paths;
pub mod protocol;
pub mod session;
pub mod validate;

pub use client::{default_base_url, ApiClient};
pub use error::ClientError;
pub use session::{CurrentUserSource, Session, SessionEvent, SessionState};
pub use validate::ValidationError;
