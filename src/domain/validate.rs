//! Required-field presence checks, one function per entity type.
//!
//! Kept independent of the persistence layer: each function inspects the
//! submitted draft and returns the ordered list of missing-field messages.
//! A required string counts as missing when it is absent or empty; numeric
//! fields only need to be present.

use crate::domain::model::{CuisineDraft, DishDraft, RestaurantDraft};

fn missing_str(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.is_empty())
}

pub fn validate_restaurant(draft: &RestaurantDraft) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if missing_str(&draft.name) {
        errors.push("Please enter restaurant name".to_string());
    }
    if missing_str(&draft.address) {
        errors.push("Please enter restaurant address".to_string());
    }
    if missing_str(&draft.available_food) {
        errors.push("Please specify whether veg, non-veg or both".to_string());
    }
    if missing_str(&draft.description) {
        errors.push("Please enter restaurant description".to_string());
    }
    if draft.phone.is_none() {
        errors.push("Please enter restaurant phone".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_cuisine(draft: &CuisineDraft) -> Result<(), Vec<String>> {
    if missing_str(&draft.name) {
        Err(vec!["Please enter cuisine name".to_string()])
    } else {
        Ok(())
    }
}

pub fn validate_dish(draft: &DishDraft) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if missing_str(&draft.names) {
        errors.push("Please enter dish name".to_string());
    }
    if missing_str(&draft.description) {
        errors.push("Please enter dish description".to_string());
    }
    if draft.price.is_none() {
        errors.push("Please enter dish price".to_string());
    }
    if missing_str(&draft.category) {
        errors.push("Please specify whether veg or non-veg".to_string());
    }
    if missing_str(&draft.ingredients) {
        errors.push("Please enter ingredients of dish".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
