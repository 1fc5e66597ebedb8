//! Requirement list endpoint.
//!
//! ```text
//! GET /requirements
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Requirement;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Requirement as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Projector")]
    pub description: String,
}

impl From<Requirement> for RequirementResponse {
    fn from(requirement: Requirement) -> Self {
        Self {
            id: requirement.id(),
            description: requirement.description().to_owned(),
        }
    }
}

/// List every requirement.
#[utoipa::path(
    get,
    path = "/requirements",
    description = "Return every stored requirement, ordered by identifier.",
    responses(
        (status = 200, description = "All requirements", body = [RequirementResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reference-data"],
    operation_id = "listRequirements"
)]
#[get("/requirements")]
pub async fn list_requirements(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<RequirementResponse>>> {
    let requirements = state.requirements.list_requirements().await?;
    Ok(web::Json(
        requirements
            .into_iter()
            .map(RequirementResponse::from)
            .collect(),
    ))
}
