//! Driven ports for reading the reference-data collections.
//!
//! Each collection (categories, locations, requirements) has its own port so
//! a lister depends only on the storage capability it actually uses. Adapters
//! return every stored row, ordered by primary key, and never filter.

use async_trait::async_trait;

use crate::domain::{Category, Location, Requirement};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading reference-data collections.
    pub enum ReferenceDataRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "reference data connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "reference data query failed: {message}",
    }
}

/// Port for reading every stored category.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Return all categories. An empty table yields an empty vector.
    async fn list_all(&self) -> Result<Vec<Category>, ReferenceDataRepositoryError>;
}

/// Port for reading every stored location.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Return all locations. An empty table yields an empty vector.
    async fn list_all(&self) -> Result<Vec<Location>, ReferenceDataRepositoryError>;
}

/// Port for reading every stored requirement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequirementRepository: Send + Sync {
    /// Return all requirements. An empty table yields an empty vector.
    async fn list_all(&self) -> Result<Vec<Requirement>, ReferenceDataRepositoryError>;
}

/// Fixture repository used when no database is configured.
///
/// Every collection reads as empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReferenceDataRepository;

#[async_trait]
impl CategoryRepository for FixtureReferenceDataRepository {
    async fn list_all(&self) -> Result<Vec<Category>, ReferenceDataRepositoryError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl LocationRepository for FixtureReferenceDataRepository {
    async fn list_all(&self) -> Result<Vec<Location>, ReferenceDataRepositoryError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl RequirementRepository for FixtureReferenceDataRepository {
    async fn list_all(&self) -> Result<Vec<Requirement>, ReferenceDataRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_reads_every_collection_as_empty() {
        let repo = FixtureReferenceDataRepository;

        assert!(CategoryRepository::list_all(&repo).await.expect("categories").is_empty());
        assert!(LocationRepository::list_all(&repo).await.expect("locations").is_empty());
        assert!(
            RequirementRepository::list_all(&repo)
                .await
                .expect("requirements")
                .is_empty()
        );
    }

    #[test]
    fn error_messages_name_the_failure_kind() {
        let connection = ReferenceDataRepositoryError::connection("pool timed out");
        let query = ReferenceDataRepositoryError::query("relation missing");

        assert_eq!(
            connection.to_string(),
            "reference data connection failed: pool timed out"
        );
        assert_eq!(query.to_string(), "reference data query failed: relation missing");
    }
}
