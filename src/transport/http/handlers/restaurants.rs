use crate::domain::model::{Restaurant, RestaurantDraft};
use crate::transport::http::types::{json_422, Acknowledgment, AppState, ErrorBody};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = RestaurantDraft,
    responses(
        (status = 200, description = "Restaurant created", body = Restaurant),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorBody),
        (status = 500, description = "Missing required fields or store failure", body = ErrorBody)
    )
)]
pub async fn create_restaurant_handler(
    State(state): State<AppState>,
    request: Result<Json<RestaurantDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"name\": ..., \"address\": ...}").into_response(),
    };

    match state.service.create_restaurant(draft).await {
        Ok(restaurant) => Json(restaurant).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/restaurants/{restaurantId}",
    params(
        ("restaurantId" = String, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Restaurant aggregate", body = Restaurant),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn get_restaurant_handler(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> impl IntoResponse {
    match state.service.get_restaurant(&restaurant_id).await {
        Ok(restaurant) => Json(restaurant).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/restaurants/{restaurantId}",
    params(
        ("restaurantId" = String, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Restaurant and all nested documents deleted", body = Acknowledgment),
        (status = 404, description = "Restaurant not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn delete_restaurant_handler(
    State(state): State<AppState>,
    Path(restaurant_id): Path<String>,
) -> impl IntoResponse {
    match state.service.delete_restaurant(&restaurant_id).await {
        Ok(()) => Json(Acknowledgment {
            message: "Restaurant deleted successfully.".to_string(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
