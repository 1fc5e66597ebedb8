//! Listers: fetch a whole reference collection and hand it to the caller.
//!
//! Each lister owns an injected repository handle and implements the matching
//! driving port. There is no filtering, caching or retrying: every call
//! re-reads storage and storage faults propagate as domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Error;
use crate::domain::ports::{
    CategoriesQuery, CategoryRepository, LocationRepository, LocationsQuery,
    ReferenceDataRepositoryError, RequirementRepository, RequirementsQuery,
};

use super::{Category, Location, Requirement};

/// Classify repository failures for the transport layer.
///
/// Connectivity problems are transient and surface as `ServiceUnavailable`;
/// anything else is an internal error.
fn map_reference_data_error(error: ReferenceDataRepositoryError) -> Error {
    match error {
        ReferenceDataRepositoryError::Connection { message } => Error::service_unavailable(message),
        ReferenceDataRepositoryError::Query { message } => Error::internal(message),
    }
}

/// Lists every stored [`Category`].
#[derive(Clone)]
pub struct CategoryLister {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryLister {
    /// Create a lister reading from `repository`.
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoriesQuery for CategoryLister {
    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        let categories = self
            .repository
            .list_all()
            .await
            .map_err(map_reference_data_error)?;
        debug!(count = categories.len(), "listed categories");
        Ok(categories)
    }
}

/// Lists every stored [`Location`].
#[derive(Clone)]
pub struct LocationLister {
    repository: Arc<dyn LocationRepository>,
}

impl LocationLister {
    /// Create a lister reading from `repository`.
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LocationsQuery for LocationLister {
    async fn list_locations(&self) -> Result<Vec<Location>, Error> {
        let locations = self
            .repository
            .list_all()
            .await
            .map_err(map_reference_data_error)?;
        debug!(count = locations.len(), "listed locations");
        Ok(locations)
    }
}

/// Lists every stored [`Requirement`].
#[derive(Clone)]
pub struct RequirementLister {
    repository: Arc<dyn RequirementRepository>,
}

impl RequirementLister {
    /// Create a lister reading from `repository`.
    pub fn new(repository: Arc<dyn RequirementRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RequirementsQuery for RequirementLister {
    async fn list_requirements(&self) -> Result<Vec<Requirement>, Error> {
        let requirements = self
            .repository
            .list_all()
            .await
            .map_err(map_reference_data_error)?;
        debug!(count = requirements.len(), "listed requirements");
        Ok(requirements)
    }
}
