//! API Lambda handler and request processing

pub mod cors;
pub mod handler;
pub mod request;
pub mod response;
pub mod validation;

// Re-export the main handler for convenience
pub use handler::{handle_request, handler};
