//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span from [`request_span`])
//! 3. Request ID (recorded on that span and the Sentry scope)

pub mod request_id;

pub use request_id::{RequestId, request_id_middleware, request_span};
