//! Driving ports for the reference-data list endpoints.
//!
//! Inbound adapters call these use-cases without importing persistence
//! concerns. Failures arrive as domain [`Error`]s already classified for the
//! transport layer.

use async_trait::async_trait;

use crate::domain::{Category, Error, Location, Requirement};

/// Use-case port for listing categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriesQuery: Send + Sync {
    /// Return every stored category in storage order.
    async fn list_categories(&self) -> Result<Vec<Category>, Error>;
}

/// Use-case port for listing locations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationsQuery: Send + Sync {
    /// Return every stored location in storage order.
    async fn list_locations(&self) -> Result<Vec<Location>, Error>;
}

/// Use-case port for listing requirements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequirementsQuery: Send + Sync {
    /// Return every stored requirement in storage order.
    async fn list_requirements(&self) -> Result<Vec<Requirement>, Error>;
}
