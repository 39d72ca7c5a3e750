//! Durable document store backed by PostgreSQL.
//!
//! Each aggregate is one JSONB row; the table is created on connect so a
//! fresh database works without a migration step.

use crate::domain::model::Restaurant;
use crate::storage::store::{assign_missing_ids, new_document_id, RestaurantStore};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

pub struct PgRestaurantStore {
    pool: PgPool,
}

impl PgRestaurantStore {
    /// Connects to the database and ensures the documents table exists.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS restaurants (
                id TEXT PRIMARY KEY,
                doc JSONB NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn new_with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn decode(doc: JsonValue) -> Result<Restaurant> {
        Ok(serde_json::from_value(doc)?)
    }
}

#[async_trait]
impl RestaurantStore for PgRestaurantStore {
    async fn insert(&self, mut doc: Restaurant) -> Result<Restaurant> {
        doc.id = new_document_id();
        assign_missing_ids(&mut doc);
        sqlx::query("INSERT INTO restaurants (id, doc) VALUES ($1, $2)")
            .bind(&doc.id)
            .bind(serde_json::to_value(&doc)?)
            .execute(&self.pool)
            .await?;
        Ok(doc)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Restaurant>> {
        let row = sqlx::query("SELECT doc FROM restaurants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(Some(Self::decode(row.try_get("doc")?)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id_and_delete(&self, id: &str) -> Result<Option<Restaurant>> {
        let row = sqlx::query("DELETE FROM restaurants WHERE id = $1 RETURNING doc")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(Some(Self::decode(row.try_get("doc")?)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, mut doc: Restaurant) -> Result<Restaurant> {
        anyhow::ensure!(!doc.id.is_empty(), "cannot save a document without an id");
        assign_missing_ids(&mut doc);
        sqlx::query(
            "INSERT INTO restaurants (id, doc) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET doc = $2",
        )
        .bind(&doc.id)
        .bind(serde_json::to_value(&doc)?)
        .execute(&self.pool)
        .await?;
        Ok(doc)
    }
}
