//! Domain model for the restaurant menu aggregate.

pub mod model;
pub mod validate;

pub use model::{Cuisine, CuisineDraft, CuisinePatch, Dish, DishDraft, DishPatch, Image, Restaurant, RestaurantDraft};
