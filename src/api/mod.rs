//! HTTP API module for the Pay Audit Engine.
//!
//! This module provides the REST endpoint for auditing a monthly pay
//! statement against reference tables and expected amounts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AccessTier, AuditRequest, FilerRequest, LineItemRequest};
pub use response::{ApiError, AuditResponse};
pub use state::AppState;
