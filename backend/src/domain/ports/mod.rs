//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (`*Repository`) describe what the domain needs from storage
//! and expose strongly typed errors so adapters map their failures into
//! predictable variants. Driving ports (`*Query`, [`UserLookup`]) are what
//! inbound adapters and external collaborators call.

mod macros;
pub(crate) use macros::define_port_error;

mod reference_data_queries;
mod reference_data_repository;
mod user_lookup;
mod user_repository;

#[cfg(test)]
pub use reference_data_queries::{
    MockCategoriesQuery, MockLocationsQuery, MockRequirementsQuery,
};
pub use reference_data_queries::{CategoriesQuery, LocationsQuery, RequirementsQuery};
#[cfg(test)]
pub use reference_data_repository::{
    MockCategoryRepository, MockLocationRepository, MockRequirementRepository,
};
pub use reference_data_repository::{
    CategoryRepository, FixtureReferenceDataRepository, LocationRepository,
    ReferenceDataRepositoryError, RequirementRepository,
};
#[cfg(test)]
pub use user_lookup::MockUserLookup;
pub use user_lookup::UserLookup;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};
