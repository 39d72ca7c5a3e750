use crate::app::error::ServiceError;
use crate::app::service::MenuService;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub service: MenuService,
}

/// Failure payload: every error leaves the service as `{"error": ...}`.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Success acknowledgment for delete operations.
#[derive(Serialize, Debug, ToSchema)]
pub struct Acknowledgment {
    pub message: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match self {
            ServiceError::RestaurantNotFound
            | ServiceError::CuisineNotFound
            | ServiceError::DishNotFound => StatusCode::NOT_FOUND,
            // Validation stays a 500: the wire contract does not
            // distinguish it from store failures at the status level.
            ServiceError::Validation(_) | ServiceError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody {
            error: format!("Invalid JSON body: {} (expected: {})", err, expected),
        }),
    )
}
