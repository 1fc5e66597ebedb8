//! HTTP inbound adapter exposing REST endpoints.

pub mod categories;
pub mod error;
pub mod health;
pub mod locations;
pub mod requirements;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

use actix_web::web;

/// Register the reference-data endpoints and health probes.
///
/// Handlers expect `web::Data<HttpState>` and `web::Data<HealthState>` to be
/// registered as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(categories::list_categories)
        .service(locations::list_locations)
        .service(requirements::list_requirements)
        .service(health::ready)
        .service(health::live);
}
