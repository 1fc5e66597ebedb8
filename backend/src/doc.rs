//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the reference-data list endpoints, the health probes
//! and the error schema wrappers. The document backs Swagger UI (debug
//! builds) and is printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::categories::CategoryResponse;
use crate::inbound::http::locations::LocationResponse;
use crate::inbound::http::requirements::RequirementResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events backend API",
        description = "Read-only access to event categories, locations and requirements."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::locations::list_locations,
        crate::inbound::http::requirements::list_requirements,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CategoryResponse,
        LocationResponse,
        RequirementResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "reference-data", description = "Categories, locations and requirements"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
