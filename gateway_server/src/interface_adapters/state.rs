use crate::domain::BackendPort;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub backend: Arc<dyn BackendPort>,
    // Adds the Secure attribute to minted cookies (production only).
    pub secure_cookies: bool,
}
