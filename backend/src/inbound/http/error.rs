//! HTTP adapter mapping for domain errors.
//!
//! The domain error type stays HTTP-agnostic; this module turns it into a
//! status code and the shared JSON envelope
//! `{code, message, traceId?}`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Replace internal messages before they reach clients.
fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(message = error.message(), trace_id = ?error.trace_id(), "internal error");
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        if matches!(error.code(), ErrorCode::ServiceUnavailable) {
            warn!(message = error.message(), trace_id = ?error.trace_id(), "backing service unavailable");
        }
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use rstest::{fixture, rstest};

    use super::*;

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    #[fixture]
    fn internal_error() -> Error {
        Error::internal("relation \"categories\" does not exist").with_trace_id(TRACE_ID)
    }

    async fn read_payload(error: &Error) -> (StatusCode, Option<String>, Error) {
        let response = ResponseError::error_response(error);
        let status = response.status();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .map(|value| value.to_str().expect("trace-id is ASCII").to_owned());
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        let payload = serde_json::from_slice(&bytes).expect("error JSON deserialises");
        (status, header, payload)
    }

    #[rstest]
    #[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(ResponseError::status_code(&error), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_errors_are_redacted(internal_error: Error) {
        let (status, header, payload) = read_payload(&internal_error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(header.as_deref(), Some(TRACE_ID));
        assert_eq!(payload.code(), ErrorCode::InternalError);
        assert_eq!(payload.message(), "Internal server error");
        assert_eq!(payload.trace_id(), Some(TRACE_ID));
    }

    #[rstest]
    #[actix_web::test]
    async fn service_unavailable_keeps_its_message() {
        let error = Error::service_unavailable("reference data connection failed")
            .with_trace_id(TRACE_ID);

        let (status, _, payload) = read_payload(&error).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(payload.message(), "reference data connection failed");
    }

    #[rstest]
    #[actix_web::test]
    async fn error_without_trace_id_omits_trace_header() {
        let error = Error::service_unavailable("pool timed out");

        let (status, header, payload) = read_payload(&error).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(header.is_none());
        assert_eq!(payload.trace_id(), None);
    }

    #[rstest]
    fn actix_errors_become_opaque_internal_errors() {
        let actix_error = actix_web::error::ErrorBadGateway("upstream exploded");

        let error = Error::from(actix_error);

        assert_eq!(error.code(), ErrorCode::InternalError);
        assert_eq!(error.message(), "Internal server error");
    }
}
