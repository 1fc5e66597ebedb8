//! Location list endpoint.
//!
//! ```text
//! GET /locations
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Location;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Location as returned to clients. The address stays flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    #[schema(example = 7)]
    pub id: i32,
    #[schema(example = "Main Auditorium")]
    pub name: String,
    #[schema(example = "Rua das Flores")]
    pub street: String,
    #[schema(example = "120")]
    pub number: String,
    #[schema(example = "Centro")]
    pub neighborhood: String,
    #[schema(example = "Recife")]
    pub city: String,
    #[schema(example = "PE")]
    pub state: String,
    #[schema(example = "50000-000")]
    pub zip_code: String,
    #[schema(example = "Next to the library")]
    pub reference_point: String,
    /// Seating capacity.
    #[schema(example = 350)]
    pub capacity: i32,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id(),
            name: location.name().to_owned(),
            street: location.street().to_owned(),
            number: location.number().to_owned(),
            neighborhood: location.neighborhood().to_owned(),
            city: location.city().to_owned(),
            state: location.state().to_owned(),
            zip_code: location.zip_code().to_owned(),
            reference_point: location.reference_point().to_owned(),
            capacity: location.capacity(),
        }
    }
}

/// List every location.
#[utoipa::path(
    get,
    path = "/locations",
    description = "Return every stored location with its address and capacity, ordered by identifier.",
    responses(
        (status = 200, description = "All locations", body = [LocationResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reference-data"],
    operation_id = "listLocations"
)]
#[get("/locations")]
pub async fn list_locations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<LocationResponse>>> {
    let locations = state.locations.list_locations().await?;
    Ok(web::Json(
        locations.into_iter().map(LocationResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::LocationDraft;
    use crate::domain::ports::MockLocationsQuery;
    use crate::inbound::http::test_utils::fixture_http_state;

    #[fixture]
    fn auditorium() -> Location {
        Location::new(LocationDraft {
            id: 7,
            name: "Main Auditorium".to_owned(),
            street: "Rua das Flores".to_owned(),
            number: "120".to_owned(),
            neighborhood: "Centro".to_owned(),
            city: "Recife".to_owned(),
            state: "PE".to_owned(),
            zip_code: "50000-000".to_owned(),
            reference_point: "Next to the library".to_owned(),
            capacity: 350,
        })
    }

    async fn get_locations(query: MockLocationsQuery) -> (StatusCode, Value) {
        let mut state = fixture_http_state();
        state.locations = Arc::new(query);
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(list_locations),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/locations").to_request(),
        )
        .await;
        let status = response.status();
        let body: Value = actix_test::read_body_json(response).await;
        (status, body)
    }

    #[rstest]
    fn response_copies_every_field(auditorium: Location) {
        let response = LocationResponse::from(auditorium.clone());

        assert_eq!(response.id, auditorium.id());
        assert_eq!(response.street, auditorium.street());
        assert_eq!(response.zip_code, auditorium.zip_code());
        assert_eq!(response.reference_point, auditorium.reference_point());
        assert_eq!(response.capacity, auditorium.capacity());
    }

    #[rstest]
    #[actix_web::test]
    async fn serialises_camel_case_fields(auditorium: Location) {
        let mut query = MockLocationsQuery::new();
        query
            .expect_list_locations()
            .returning(move || Ok(vec![auditorium.clone()]));

        let (status, body) = get_locations(query).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": 7,
                "name": "Main Auditorium",
                "street": "Rua das Flores",
                "number": "120",
                "neighborhood": "Centro",
                "city": "Recife",
                "state": "PE",
                "zipCode": "50000-000",
                "referencePoint": "Next to the library",
                "capacity": 350
            }])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_storage_yields_empty_array() {
        let mut query = MockLocationsQuery::new();
        query.expect_list_locations().returning(|| Ok(Vec::new()));

        let (status, body) = get_locations(query).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
