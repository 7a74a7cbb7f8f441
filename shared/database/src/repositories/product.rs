//! Product Repository
//!
//! Component products are created by exact name and read back as a name
//! snapshot for the rules.
//! Uses runtime SQL queries (unchecked) to avoid requiring DATABASE_URL at compile time.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use forgebom_models::UnitOfMeasure;

use super::catalog::InMemoryCatalog;

pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Return the product's id, creating it with `uom` when it is new.
    ///
    /// Runs on the caller's connection so it joins the BOM transaction. An
    /// existing product keeps its stored unit of measure.
    pub async fn find_or_create(
        conn: &mut PgConnection,
        name: &str,
        uom: UnitOfMeasure,
    ) -> Result<Uuid> {
        let (id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO products (id, name, uom, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(uom.as_str())
        .bind(Utc::now())
        .fetch_one(conn)
        .await
        .context("Failed to find or create product")?;

        Ok(id)
    }

    /// Load every product name into an in-memory catalog.
    pub async fn catalog_snapshot(&self) -> Result<InMemoryCatalog> {
        let names: Vec<(String,)> = sqlx::query_as("SELECT name FROM products")
            .fetch_all(&self.pool)
            .await
            .context("Failed to load product catalog")?;

        let catalog: InMemoryCatalog = names.into_iter().map(|(name,)| name).collect();
        tracing::debug!(products = catalog.len(), "Loaded catalog snapshot");
        Ok(catalog)
    }
}
