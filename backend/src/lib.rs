//! Read-only backend for event reference data.
//!
//! Serves categories, locations and requirements over HTTP and offers a
//! user lookup for an external authentication layer. Domain types and ports
//! live in [`domain`]; adapters in [`inbound`] and [`outbound`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
