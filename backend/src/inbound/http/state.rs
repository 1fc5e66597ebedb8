//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CategoriesQuery, LocationsQuery, RequirementsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub categories: Arc<dyn CategoriesQuery>,
    pub locations: Arc<dyn LocationsQuery>,
    pub requirements: Arc<dyn RequirementsQuery>,
}

impl HttpState {
    /// Bundle the list use-cases served over HTTP.
    pub fn new(
        categories: Arc<dyn CategoriesQuery>,
        locations: Arc<dyn LocationsQuery>,
        requirements: Arc<dyn RequirementsQuery>,
    ) -> Self {
        Self {
            categories,
            locations,
            requirements,
        }
    }
}
