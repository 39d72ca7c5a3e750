//! Typed failures for the menu service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Restaurant not found.")]
    RestaurantNotFound,

    #[error("Cuisine not found.")]
    CuisineNotFound,

    #[error("Dish not found.")]
    DishNotFound,

    /// Ordered missing-field messages from `domain::validate`.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// Underlying persistence failure, surfaced to the caller verbatim.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
