//! Domain primitives, ports and services.
//!
//! Purpose: define the reference-data entities and user identity types used
//! by the HTTP and persistence layers, the ports at the hexagon's edges, and
//! the services (listers, user lookup) that sit between them.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Category, Location, Requirement: reference entities.
//! - CategoryLister, LocationLister, RequirementLister: list use-cases.
//! - User, AuthPrincipal, UserLookupService: identity lookups.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod reference_data;
pub mod trace_id;
pub mod user;
mod user_lookup;

pub use self::error::{Error, ErrorCode};
pub use self::reference_data::{
    Category, CategoryLister, Location, LocationDraft, LocationLister, Requirement,
    RequirementLister,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    AuthPrincipal, Email, User, UserDraft, UserId, UserRole, UserValidationError, Username,
};
pub use self::user_lookup::UserLookupService;
