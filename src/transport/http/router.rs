use crate::domain::model::{
    Cuisine, CuisineDraft, CuisinePatch, Dish, DishDraft, DishPatch, Image, Restaurant,
    RestaurantDraft,
};
use crate::transport::http::handlers::{cuisines, dishes, health, restaurants};
use crate::transport::http::types::{Acknowledgment, ErrorBody};
use axum::routing::{get, post, put};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        restaurants::create_restaurant_handler,
        restaurants::get_restaurant_handler,
        restaurants::delete_restaurant_handler,
        cuisines::add_cuisine_handler,
        cuisines::update_cuisine_handler,
        cuisines::delete_cuisine_handler,
        dishes::add_dish_handler,
        dishes::update_dish_handler,
        dishes::delete_dish_handler
    ),
    components(schemas(
        Restaurant,
        Cuisine,
        Dish,
        Image,
        RestaurantDraft,
        CuisineDraft,
        DishDraft,
        CuisinePatch,
        DishPatch,
        Acknowledgment,
        ErrorBody
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/restaurants", post(restaurants::create_restaurant_handler))
        .route(
            "/restaurants/:restaurant_id",
            get(restaurants::get_restaurant_handler)
                .delete(restaurants::delete_restaurant_handler),
        )
        .route(
            "/restaurants/:restaurant_id/cuisines",
            post(cuisines::add_cuisine_handler),
        )
        .route(
            "/restaurants/:restaurant_id/cuisines/:cuisine_id",
            put(cuisines::update_cuisine_handler).delete(cuisines::delete_cuisine_handler),
        )
        .route(
            "/restaurants/:restaurant_id/cuisines/:cuisine_id/dishes",
            post(dishes::add_dish_handler),
        )
        .route(
            "/restaurants/:restaurant_id/cuisines/:cuisine_id/dishes/:dish_id",
            put(dishes::update_dish_handler).delete(dishes::delete_dish_handler),
        )
        .with_state(app_state)
}
