//! The opaque document-store contract the menu service persists through.
//!
//! The whole `Restaurant` aggregate is the unit of storage: `save` always
//! rewrites the full document, including every nested mutation made in
//! memory since it was loaded. There is no partial or nested persistence
//! API on purpose.

use crate::domain::model::Restaurant;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Persists a new aggregate and returns it with its assigned identity.
    async fn insert(&self, doc: Restaurant) -> Result<Restaurant>;

    /// Loads an aggregate by id, `None` if absent.
    async fn find_by_id(&self, id: &str) -> Result<Option<Restaurant>>;

    /// Deletes an aggregate by id in one store operation, returning the
    /// deleted document, `None` if absent.
    async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Restaurant>>;

    /// Rewrites the full aggregate. Sub-documents appended since the last
    /// load get their identity assigned here.
    async fn save(&self, doc: Restaurant) -> Result<Restaurant>;
}

/// Generates a store-assigned identity (32-char hex).
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Stamps an id onto every embedded sub-document that does not have one
/// yet. Existing ids are never touched; identities are immutable once
/// assigned.
pub fn assign_missing_ids(doc: &mut Restaurant) {
    for cuisine in &mut doc.cuisines {
        if cuisine.id.is_empty() {
            cuisine.id = new_document_id();
        }
        for dish in &mut cuisine.dishes {
            if dish.id.is_empty() {
                dish.id = new_document_id();
            }
        }
    }
}
