//! Conversion of AppError into HTTP responses.
//!
//! The resolver reports an unknown program as an absent result; the
//! handler turns that into `NotFound`, which maps to 404 here. Every
//! other failure is a server-side error to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - UpstreamApi → 500 INTERNAL_SERVER_ERROR
    /// - MalformedDate → 500 INTERNAL_SERVER_ERROR
    /// - Configuration → 500 INTERNAL_SERVER_ERROR
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    "NOT_FOUND",
                    &format!("{} with {}={} was not found", entity, field, value),
                ),
            ),
            AppError::UpstreamApi { message, .. } => {
                tracing::error!(error = %self, "Upstream API failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("UPSTREAM_ERROR", "Upstream API request failed")
                        .with_details(message),
                )
            }
            AppError::MalformedDate { value } => {
                tracing::error!(value = %value, "Undecodable publish date from upstream");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("MALFORMED_DATE", "Upstream publish date could not be decoded"),
                )
            }
            AppError::Configuration { key, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("CONFIGURATION_ERROR", &format!("Configuration error: {}", key)),
            ),
            AppError::Internal { .. } => {
                tracing::error!(error = ?self, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound {
            entity: "program".to_string(),
            field: "name".to_string(),
            value: "nosuch".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_error_maps_to_500() {
        let err = AppError::UpstreamApi {
            message: "GET /programs/index request failed".to_string(),
            source: None,
        };
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_malformed_date_maps_to_500() {
        let err = AppError::MalformedDate {
            value: "no digits".to_string(),
        };
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
