//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::{AdminAppState, ContentAppState};
pub use router::{admin_router, public_router, user_router};
