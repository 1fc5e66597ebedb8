//! PostgreSQL-backed reference-data read adapter.
//!
//! One repository serves the three collection ports. Each list is a single
//! `SELECT` ordered by primary key, so repeated reads over unchanged tables
//! return the same sequence.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    CategoryRepository, LocationRepository, ReferenceDataRepositoryError, RequirementRepository,
};
use crate::domain::{Category, Location, LocationDraft, Requirement};

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{CategoryRow, LocationRow, RequirementRow};
use super::pool::{DbPool, PoolError};
use super::schema::{categories, locations, requirements};

/// Diesel-backed implementation of the reference-data read ports.
#[derive(Clone)]
pub struct DieselReferenceDataRepository {
    pool: DbPool,
}

impl DieselReferenceDataRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ReferenceDataRepositoryError {
    map_basic_pool_error(error, ReferenceDataRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ReferenceDataRepositoryError {
    map_basic_diesel_error(
        error,
        ReferenceDataRepositoryError::query,
        ReferenceDataRepositoryError::connection,
    )
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::new(row.id, row.name, row.description)
    }
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location::new(LocationDraft {
            id: row.id,
            name: row.name,
            street: row.street,
            number: row.number,
            neighborhood: row.neighborhood,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            reference_point: row.reference_point,
            capacity: row.capacity,
        })
    }
}

impl From<RequirementRow> for Requirement {
    fn from(row: RequirementRow) -> Self {
        Requirement::new(row.id, row.description)
    }
}

#[async_trait]
impl CategoryRepository for DieselReferenceDataRepository {
    async fn list_all(&self) -> Result<Vec<Category>, ReferenceDataRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CategoryRow> = categories::table
            .select(CategoryRow::as_select())
            .order_by(categories::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}

#[async_trait]
impl LocationRepository for DieselReferenceDataRepository {
    async fn list_all(&self) -> Result<Vec<Location>, ReferenceDataRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<LocationRow> = locations::table
            .select(LocationRow::as_select())
            .order_by(locations::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Location::from).collect())
    }
}

#[async_trait]
impl RequirementRepository for DieselReferenceDataRepository {
    async fn list_all(&self) -> Result<Vec<Requirement>, ReferenceDataRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<RequirementRow> = requirements::table
            .select(RequirementRow::as_select())
            .order_by(requirements::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Requirement::from).collect())
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion and error mapping. Query behaviour is covered by the
    //! PostgreSQL integration suite.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn location_row_maps_every_column() {
        let row = LocationRow {
            id: 4,
            name: "Block B Lab".to_owned(),
            street: "Av. Brasil".to_owned(),
            number: "s/n".to_owned(),
            neighborhood: "Boa Vista".to_owned(),
            city: "Recife".to_owned(),
            state: "PE".to_owned(),
            zip_code: "50050-000".to_owned(),
            reference_point: "Opposite the canteen".to_owned(),
            capacity: 40,
        };

        let location = Location::from(row);

        assert_eq!(location.id(), 4);
        assert_eq!(location.number(), "s/n");
        assert_eq!(location.zip_code(), "50050-000");
        assert_eq!(location.reference_point(), "Opposite the canteen");
        assert_eq!(location.capacity(), 40);
    }

    #[rstest]
    fn category_and_requirement_rows_map_verbatim() {
        let category = Category::from(CategoryRow {
            id: 1,
            name: "Music".to_owned(),
            description: "Live music events".to_owned(),
        });
        let requirement = Requirement::from(RequirementRow {
            id: 9,
            description: "Projector".to_owned(),
        });

        assert_eq!(category, Category::new(1, "Music", "Live music events"));
        assert_eq!(requirement, Requirement::new(9, "Projector"));
    }

    #[rstest]
    fn pool_failures_are_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out waiting for connection"));
        assert!(matches!(
            mapped,
            ReferenceDataRepositoryError::Connection { .. }
        ));
    }
}
