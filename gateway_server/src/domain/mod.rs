pub mod credential;
mod ports;
mod route_class;

// Re-export the domain boundary types and ports.
pub use ports::{BackendError, BackendPort, BackendReply, ProxiedRequest};
pub use route_class::{classify, RouteClass};
