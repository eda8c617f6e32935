use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_types::ValidationErrors;
use database::DbError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Converts our custom `ApiError` into an HTTP response.
///
/// One deterministic status policy for the whole API: 400 with the field-error
/// map for rejected input, 404 for a determined absence, 503 when the store is
/// unreachable, 500 for any other database fault. Internal detail is logged,
/// never sent to the client.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::Database(DbError::NotFound) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Student not found" })),
            )
                .into_response(),
            ApiError::Database(db_err @ DbError::Connection(_)) => {
                tracing::error!(error = ?db_err, "Database unreachable.");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "error": "The database is unavailable" })),
                )
                    .into_response()
            }
            ApiError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An internal database error occurred" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn a_determined_absence_maps_to_404() {
        let response = ApiError::Database(DbError::NotFound).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Student not found" })
        );
    }

    #[tokio::test]
    async fn an_unreachable_store_maps_to_503() {
        let error = ApiError::Database(DbError::Connection(sqlx::Error::PoolTimedOut));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "The database is unavailable" })
        );
    }

    #[tokio::test]
    async fn a_query_fault_maps_to_500_without_leaking_detail() {
        let error = ApiError::Database(DbError::Query(sqlx::Error::PoolClosed));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "An internal database error occurred" })
        );
    }
}
