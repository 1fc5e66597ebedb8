//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use events_backend::domain::ports::{
    CategoryRepository, FixtureReferenceDataRepository, LocationRepository, RequirementRepository,
};
use events_backend::domain::{CategoryLister, LocationLister, RequirementLister};
use events_backend::inbound::http::state::HttpState;
use events_backend::outbound::persistence::{DbPool, DieselReferenceDataRepository};

/// Repository handles for the three reference collections.
struct ReferenceRepositories {
    categories: Arc<dyn CategoryRepository>,
    locations: Arc<dyn LocationRepository>,
    requirements: Arc<dyn RequirementRepository>,
}

fn reference_repositories(pool: Option<&DbPool>) -> ReferenceRepositories {
    match pool {
        Some(pool) => {
            let repository = Arc::new(DieselReferenceDataRepository::new(pool.clone()));
            ReferenceRepositories {
                categories: repository.clone(),
                locations: repository.clone(),
                requirements: repository,
            }
        }
        None => {
            info!("no database pool; reference data served from fixtures");
            let repository = Arc::new(FixtureReferenceDataRepository);
            ReferenceRepositories {
                categories: repository.clone(),
                locations: repository.clone(),
                requirements: repository,
            }
        }
    }
}

/// Build the HTTP state, using Diesel repositories when a pool is available.
pub fn build_http_state(pool: Option<&DbPool>) -> web::Data<HttpState> {
    let repositories = reference_repositories(pool);
    web::Data::new(HttpState::new(
        Arc::new(CategoryLister::new(repositories.categories)),
        Arc::new(LocationLister::new(repositories.locations)),
        Arc::new(RequirementLister::new(repositories.requirements)),
    ))
}
