//! In-process document store: a map of aggregates behind an async lock.
//!
//! Backs the integration tests and database-less local runs with the same
//! contract as the Postgres store.

use crate::domain::model::Restaurant;
use crate::storage::store::{assign_missing_ids, new_document_id, RestaurantStore};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryRestaurantStore {
    docs: RwLock<HashMap<String, Restaurant>>,
}

impl MemoryRestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored aggregates.
    pub async fn count(&self) -> usize {
        self.docs.read().await.len()
    }
}

#[async_trait]
impl RestaurantStore for MemoryRestaurantStore {
    async fn insert(&self, mut doc: Restaurant) -> Result<Restaurant> {
        doc.id = new_document_id();
        assign_missing_ids(&mut doc);
        let mut docs = self.docs.write().await;
        docs.insert(doc.id.clone(), doc.clone());
        Ok(doc)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Restaurant>> {
        let docs = self.docs.read().await;
        Ok(docs.get(id).cloned())
    }

    async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Restaurant>> {
        let mut docs = self.docs.write().await;
        Ok(docs.remove(id))
    }

    async fn save(&self, mut doc: Restaurant) -> Result<Restaurant> {
        anyhow::ensure!(!doc.id.is_empty(), "cannot save a document without an id");
        assign_missing_ids(&mut doc);
        let mut docs = self.docs.write().await;
        docs.insert(doc.id.clone(), doc.clone());
        Ok(doc)
    }
}
