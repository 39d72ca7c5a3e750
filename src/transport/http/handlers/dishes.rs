use crate::domain::model::{Dish, DishDraft, DishPatch};
use crate::transport::http::types::{json_422, Acknowledgment, AppState, ErrorBody};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/restaurants/{restaurantId}/cuisines/{cuisineId}/dishes",
    params(
        ("restaurantId" = String, Path, description = "Restaurant id"),
        ("cuisineId" = String, Path, description = "Cuisine id")
    ),
    request_body = DishDraft,
    responses(
        (status = 200, description = "Dish appended; the submitted fields are echoed back", body = DishDraft),
        (status = 404, description = "Restaurant or cuisine not found", body = ErrorBody),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorBody),
        (status = 500, description = "Missing required fields or store failure", body = ErrorBody)
    )
)]
pub async fn add_dish_handler(
    State(state): State<AppState>,
    Path((restaurant_id, cuisine_id)): Path<(String, String)>,
    request: Result<Json<DishDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"names\": ..., \"price\": ...}").into_response(),
    };

    let echo = draft.clone();
    match state.service.add_dish(&restaurant_id, &cuisine_id, draft).await {
        Ok(_) => Json(echo).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/restaurants/{restaurantId}/cuisines/{cuisineId}/dishes/{dishId}",
    params(
        ("restaurantId" = String, Path, description = "Restaurant id"),
        ("cuisineId" = String, Path, description = "Cuisine id"),
        ("dishId" = String, Path, description = "Dish id")
    ),
    request_body = DishPatch,
    responses(
        (status = 200, description = "Updated dish", body = Dish),
        (status = 404, description = "Restaurant, cuisine or dish not found", body = ErrorBody),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn update_dish_handler(
    State(state): State<AppState>,
    Path((restaurant_id, cuisine_id, dish_id)): Path<(String, String, String)>,
    request: Result<Json<DishPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"names\": ..., \"price\": ...}").into_response(),
    };

    match state
        .service
        .update_dish(&restaurant_id, &cuisine_id, &dish_id, patch)
        .await
    {
        Ok(dish) => Json(dish).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/restaurants/{restaurantId}/cuisines/{cuisineId}/dishes/{dishId}",
    params(
        ("restaurantId" = String, Path, description = "Restaurant id"),
        ("cuisineId" = String, Path, description = "Cuisine id"),
        ("dishId" = String, Path, description = "Dish id")
    ),
    responses(
        (status = 200, description = "Dish deleted", body = Acknowledgment),
        (status = 404, description = "Restaurant, cuisine or dish not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn delete_dish_handler(
    State(state): State<AppState>,
    Path((restaurant_id, cuisine_id, dish_id)): Path<(String, String, String)>,
) -> impl IntoResponse {
    match state
        .service
        .delete_dish(&restaurant_id, &cuisine_id, &dish_id)
        .await
    {
        Ok(()) => Json(Acknowledgment {
            message: "Dish deleted successfully.".to_string(),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
