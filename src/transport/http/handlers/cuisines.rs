use crate::domain::model::{Cuisine, CuisineDraft, CuisinePatch};
use crate::transport::http::types::{json_422, Acknowledgment, AppState, ErrorBody};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/restaurants/{restaurantId}/cuisines",
    params(
        ("restaurantId" = String, Path, description = "Restaurant id")
    ),
    request_body = CuisineDraft,
    responses(
        (status = 200, description = "Cuisine appended; the submitted fields are echoed back", body = CuisineDraft),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorBody),
        (status = 500, description = "Missing required fields or store failure", body = ErrorBody)
    )
)]
pub async fn add_cuisine_handler(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
    request: Result<Json<CuisineDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"name\": ...}").into_response(),
    };

    // The response echoes what was submitted; the assigned id is visible on
    // the next read of the aggregate.
    let echo = draft.clone();
    match state.service.add_cuisine(&restaurant_id, draft).await {
        Ok(_) => Json(echo).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/restaurants/{restaurantId}/cuisines/{cuisineId}",
    params(
        ("restaurantId" = String, Path, description = "Restaurant id"),
        ("cuisineId" = String, Path, description = "Cuisine id")
    ),
    request_body = CuisinePatch,
    responses(
        (status = 200, description = "Updated cuisine", body = Cuisine),
        (status = 404, description = "Restaurant or cuisine not found", body = ErrorBody),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn update_cuisine_handler(
    State(state): State<AppState>,
    Path((restaurant_id, cuisine_id)): Path<(String, String)>,
    request: Result<Json<CuisinePatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"name\": ...}").into_response(),
    };

    match state
        .service
        .update_cuisine(&restaurant_id, &cuisine_id, patch)
        .await
    {
        Ok(cuisine) => Json(cuisine).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/restaurants/{restaurantId}/cuisines/{cuisineId}",
    params(
        ("restaurantId" = String, Path, description = "Restaurant id"),
        ("cuisineId" = String, Path, description = "Cuisine id")
    ),
    responses(
        (status = 200, description = "Cuisine and its dishes deleted", body = Acknowledgment),
        (status = 404, description = "Restaurant or cuisine not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn delete_cuisine_handler(
    State(state): State<AppState>,
    Path((restaurant_id, cuisine_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.service.delete_cuisine(&restaurant_id, &cuisine_id).await {
        Ok(()) => Json(Acknowledgment {
            message: "Cuisine deleted successfully.".to_string(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
