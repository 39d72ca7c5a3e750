//! The Restaurant aggregate and its embedded sub-documents.
//!
//! A `Restaurant` is the only persistence unit: cuisines and dishes exist
//! solely as ordered sequences embedded in their parent and are addressed by
//! id through the path-resolution helpers below. Mutating a nested field
//! always means loading the whole aggregate, editing it in place, and saving
//! the whole aggregate back.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Opaque image metadata pair. Both fields are required whenever an image
/// object is submitted; deserialization rejects partial pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Image {
    pub public_id: String,
    pub url: String,
}

/// A dish embedded in a cuisine. `names` is the display name — the field
/// name is kept as-is from the wire format this API has always spoken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    /// Store-assigned, unique within the parent cuisine.
    #[serde(default)]
    pub id: String,
    pub names: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub ingredients: String,
    #[serde(default)]
    pub ratings: f64,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// A cuisine embedded in a restaurant, holding its dishes in append order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cuisine {
    /// Store-assigned, unique within the parent restaurant.
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

/// The aggregate root. Persisted as a single document; `cuisines` keeps
/// insertion order across save/reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    /// Store-assigned on insert.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub address: String,
    /// "veg" / "non-veg" / "both" by convention; any string is accepted.
    #[serde(rename = "availableFood")]
    pub available_food: String,
    pub description: String,
    pub phone: i64,
    #[serde(default)]
    pub ratings: f64,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub cuisines: Vec<Cuisine>,
}

/// Submitted fields for creating a restaurant. Everything is optional at the
/// wire level so that required-field checking stays an explicit validation
/// step (see `domain::validate`) instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "availableFood", skip_serializing_if = "Option::is_none")]
    pub available_food: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CuisineDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DishDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
}

/// Partial update for a dish. Empty string / zero count as "not supplied":
/// this endpoint cannot clear a field, only overwrite it with a non-falsy
/// value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DishPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Partial update for a cuisine, same falsy-skip semantics as `DishPatch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CuisinePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Restaurant {
    /// Builds a new aggregate from a validated draft. The id stays empty
    /// until the store assigns one on insert.
    pub fn from_draft(draft: RestaurantDraft) -> Self {
        Restaurant {
            id: String::new(),
            name: draft.name.unwrap_or_default(),
            address: draft.address.unwrap_or_default(),
            available_food: draft.available_food.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            phone: draft.phone.unwrap_or_default(),
            ratings: draft.ratings.unwrap_or(0.0),
            images: draft.images.unwrap_or_default(),
            cuisines: Vec::new(),
        }
    }
}

impl Cuisine {
    pub fn from_draft(draft: CuisineDraft) -> Self {
        Cuisine {
            id: String::new(),
            name: draft.name.unwrap_or_default(),
            dishes: Vec::new(),
        }
    }
}

impl Dish {
    pub fn from_draft(draft: DishDraft) -> Self {
        Dish {
            id: String::new(),
            names: draft.names.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            price: draft.price.unwrap_or_default(),
            category: draft.category.unwrap_or_default(),
            ingredients: draft.ingredients.unwrap_or_default(),
            ratings: draft.ratings.unwrap_or(0.0),
            images: draft.images.unwrap_or_default(),
        }
    }
}

/// Resolves a cuisine by id inside the aggregate.
pub fn find_cuisine<'a>(restaurant: &'a Restaurant, cuisine_id: &str) -> Option<&'a Cuisine> {
    restaurant.cuisines.iter().find(|c| c.id == cuisine_id)
}

pub fn find_cuisine_mut<'a>(
    restaurant: &'a mut Restaurant,
    cuisine_id: &str,
) -> Option<&'a mut Cuisine> {
    restaurant.cuisines.iter_mut().find(|c| c.id == cuisine_id)
}

/// Resolves a dish by id inside an already-resolved cuisine.
pub fn find_dish<'a>(cuisine: &'a Cuisine, dish_id: &str) -> Option<&'a Dish> {
    cuisine.dishes.iter().find(|d| d.id == dish_id)
}

pub fn find_dish_mut<'a>(cuisine: &'a mut Cuisine, dish_id: &str) -> Option<&'a mut Dish> {
    cuisine.dishes.iter_mut().find(|d| d.id == dish_id)
}
