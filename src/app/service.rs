//! The Aggregate Store Service.
//!
//! This module is the intermediary between the HTTP handlers and the
//! document store. Every operation is a single load-validate-mutate-persist
//! pass over the whole `Restaurant` aggregate:
//! 1. Load the aggregate by id (outer-to-inner lookups, first miss wins).
//! 2. Validate required fields / resolve the nested path.
//! 3. Mutate the in-memory aggregate.
//! 4. Save the whole aggregate back.
//!
//! There is no optimistic concurrency check and no per-aggregate lock:
//! concurrent load-mutate-save cycles against the same restaurant race, and
//! the last save wins.

use crate::app::error::ServiceError;
use crate::domain::model::{
    find_cuisine_mut, find_dish_mut, Cuisine, CuisineDraft, CuisinePatch, Dish, DishDraft,
    DishPatch, Restaurant, RestaurantDraft,
};
use crate::domain::validate;
use crate::storage::RestaurantStore;
use std::sync::Arc;

/// The service owns nothing but the injected store handle; all state lives
/// in the store.
#[derive(Clone)]
pub struct MenuService {
    store: Arc<dyn RestaurantStore>,
}

impl MenuService {
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }

    /// Validates and stores a new restaurant with an empty cuisine sequence.
    pub async fn create_restaurant(
        &self,
        draft: RestaurantDraft,
    ) -> Result<Restaurant, ServiceError> {
        validate::validate_restaurant(&draft).map_err(ServiceError::Validation)?;
        let created = self.store.insert(Restaurant::from_draft(draft)).await?;
        Ok(created)
    }

    pub async fn get_restaurant(&self, restaurant_id: &str) -> Result<Restaurant, ServiceError> {
        self.store
            .find_by_id(restaurant_id)
            .await?
            .ok_or(ServiceError::RestaurantNotFound)
    }

    /// Appends a cuisine (empty dishes) to an existing restaurant and
    /// rewrites the aggregate. Returns the persisted sub-document, id
    /// included.
    pub async fn add_cuisine(
        &self,
        restaurant_id: &str,
        draft: CuisineDraft,
    ) -> Result<Cuisine, ServiceError> {
        let mut restaurant = self.get_restaurant(restaurant_id).await?;
        validate::validate_cuisine(&draft).map_err(ServiceError::Validation)?;

        restaurant.cuisines.push(Cuisine::from_draft(draft));
        let saved = self.store.save(restaurant).await?;
        // The appended cuisine is the last one; save just stamped its id.
        Ok(saved.cuisines.last().cloned().expect("appended cuisine present"))
    }

    /// Appends a dish to a cuisine inside the aggregate and rewrites the
    /// whole restaurant.
    pub async fn add_dish(
        &self,
        restaurant_id: &str,
        cuisine_id: &str,
        draft: DishDraft,
    ) -> Result<Dish, ServiceError> {
        let mut restaurant = self.get_restaurant(restaurant_id).await?;
        let cuisine =
            find_cuisine_mut(&mut restaurant, cuisine_id).ok_or(ServiceError::CuisineNotFound)?;
        validate::validate_dish(&draft).map_err(ServiceError::Validation)?;

        cuisine.dishes.push(Dish::from_draft(draft));
        let saved = self.store.save(restaurant).await?;
        let dish = saved
            .cuisines
            .iter()
            .find(|c| c.id == cuisine_id)
            .and_then(|c| c.dishes.last())
            .cloned()
            .expect("appended dish present");
        Ok(dish)
    }

    /// Partial update: each of `names`/`price` that is present and non-falsy
    /// overwrites the dish field; empty string and zero are treated as "not
    /// supplied" and skipped.
    pub async fn update_dish(
        &self,
        restaurant_id: &str,
        cuisine_id: &str,
        dish_id: &str,
        patch: DishPatch,
    ) -> Result<Dish, ServiceError> {
        let mut restaurant = self.get_restaurant(restaurant_id).await?;
        let cuisine =
            find_cuisine_mut(&mut restaurant, cuisine_id).ok_or(ServiceError::CuisineNotFound)?;
        let dish = find_dish_mut(cuisine, dish_id).ok_or(ServiceError::DishNotFound)?;

        if let Some(names) = patch.names {
            if !names.is_empty() {
                dish.names = names;
            }
        }
        if let Some(price) = patch.price {
            if price != 0.0 {
                dish.price = price;
            }
        }
        let updated = dish.clone();
        self.store.save(restaurant).await?;
        Ok(updated)
    }

    pub async fn delete_dish(
        &self,
        restaurant_id: &str,
        cuisine_id: &str,
        dish_id: &str,
    ) -> Result<(), ServiceError> {
        let mut restaurant = self.get_restaurant(restaurant_id).await?;
        let cuisine =
            find_cuisine_mut(&mut restaurant, cuisine_id).ok_or(ServiceError::CuisineNotFound)?;
        let idx = cuisine
            .dishes
            .iter()
            .position(|d| d.id == dish_id)
            .ok_or(ServiceError::DishNotFound)?;

        cuisine.dishes.remove(idx);
        self.store.save(restaurant).await?;
        Ok(())
    }

    pub async fn update_cuisine(
        &self,
        restaurant_id: &str,
        cuisine_id: &str,
        patch: CuisinePatch,
    ) -> Result<Cuisine, ServiceError> {
        let mut restaurant = self.get_restaurant(restaurant_id).await?;
        let cuisine =
            find_cuisine_mut(&mut restaurant, cuisine_id).ok_or(ServiceError::CuisineNotFound)?;

        if let Some(name) = patch.name {
            if !name.is_empty() {
                cuisine.name = name;
            }
        }
        let updated = cuisine.clone();
        self.store.save(restaurant).await?;
        Ok(updated)
    }

    /// Removes a cuisine, and with it all of its dishes.
    pub async fn delete_cuisine(
        &self,
        restaurant_id: &str,
        cuisine_id: &str,
    ) -> Result<(), ServiceError> {
        let mut restaurant = self.get_restaurant(restaurant_id).await?;
        let idx = restaurant
            .cuisines
            .iter()
            .position(|c| c.id == cuisine_id)
            .ok_or(ServiceError::CuisineNotFound)?;

        restaurant.cuisines.remove(idx);
        self.store.save(restaurant).await?;
        Ok(())
    }

    /// Deletes the aggregate, and implicitly every nested cuisine and dish,
    /// in one store operation.
    pub async fn delete_restaurant(&self, restaurant_id: &str) -> Result<(), ServiceError> {
        self.store
            .find_by_id_and_delete(restaurant_id)
            .await?
            .ok_or(ServiceError::RestaurantNotFound)?;
        Ok(())
    }
}
