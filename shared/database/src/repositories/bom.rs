//! BOM Store
//!
//! Writes generated BOMs: component find-or-create, header, ordered lines
//! and routing operations. Writes go through a [`BomTransaction`]; nothing
//! is visible until it commits, and dropping it uncommitted discards
//! everything it wrote, components included.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, Transaction};
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use forgebom_models::{BomLine, BomRecord, RoutingOperation, UnitOfMeasure};

use super::catalog::InMemoryCatalog;
use super::product::ProductRepository;

#[async_trait]
pub trait BomStore: Send + Sync {
    /// Opens a write transaction.
    async fn begin(&self) -> Result<Box<dyn BomTransaction>>;

    async fn bom_exists(&self, product_id: Uuid) -> Result<bool>;

    /// Most recent BOM of a product.
    async fn find_bom(&self, product_id: Uuid) -> Result<Option<BomRecord>>;

    /// Snapshot of the product names the rules may check against.
    async fn catalog(&self) -> Result<InMemoryCatalog>;

    /// Fails when the backing database cannot be reached.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Writes of one BOM. Uncommitted writes are discarded on drop.
#[async_trait]
pub trait BomTransaction: Send {
    /// Id of the named component product, creating it when missing.
    async fn find_or_create_component(&mut self, name: &str, uom: UnitOfMeasure) -> Result<Uuid>;

    async fn create_bom(
        &mut self,
        product_id: Uuid,
        code: &str,
        lines: Vec<BomLine>,
        operations: Vec<RoutingOperation>,
    ) -> Result<Uuid>;

    async fn commit(&mut self) -> Result<()>;
}

fn validated_record(
    product_id: Uuid,
    code: &str,
    lines: Vec<BomLine>,
    operations: Vec<RoutingOperation>,
) -> Result<BomRecord> {
    let record = BomRecord::new(product_id, code, lines, operations);
    record
        .validate()
        .map_err(|e| anyhow!("Invalid BOM for product {}: {}", product_id, e))?;
    Ok(record)
}

type ComponentMap = HashMap<String, (Uuid, UnitOfMeasure)>;

/// Store kept in memory, for previews and tests.
#[derive(Debug, Default)]
pub struct InMemoryBomStore {
    components: Arc<RwLock<ComponentMap>>,
    boms: Arc<RwLock<Vec<BomRecord>>>,
}

impl InMemoryBomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose catalog already lists the given products.
    pub fn with_products<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                let uom = UnitOfMeasure::for_component(&name, forgebom_models::DEFAULT_METER_KEYWORDS);
                (name, (Uuid::new_v4(), uom))
            })
            .collect();

        Self {
            components: Arc::new(RwLock::new(components)),
            boms: Arc::default(),
        }
    }

    pub async fn component_count(&self) -> usize {
        self.components.read().await.len()
    }

    pub async fn bom_count(&self) -> usize {
        self.boms.read().await.len()
    }
}

#[async_trait]
impl BomStore for InMemoryBomStore {
    async fn begin(&self) -> Result<Box<dyn BomTransaction>> {
        Ok(Box::new(InMemoryBomTransaction {
            components: Arc::clone(&self.components),
            boms: Arc::clone(&self.boms),
            new_components: ComponentMap::new(),
            new_boms: Vec::new(),
        }))
    }

    async fn bom_exists(&self, product_id: Uuid) -> Result<bool> {
        Ok(self
            .boms
            .read()
            .await
            .iter()
            .any(|bom| bom.product_id == product_id))
    }

    async fn find_bom(&self, product_id: Uuid) -> Result<Option<BomRecord>> {
        Ok(self
            .boms
            .read()
            .await
            .iter()
            .rev()
            .find(|bom| bom.product_id == product_id)
            .cloned())
    }

    async fn catalog(&self) -> Result<InMemoryCatalog> {
        Ok(self.components.read().await.keys().cloned().collect())
    }
}

/// Buffers writes until commit.
pub struct InMemoryBomTransaction {
    components: Arc<RwLock<ComponentMap>>,
    boms: Arc<RwLock<Vec<BomRecord>>>,
    new_components: ComponentMap,
    new_boms: Vec<BomRecord>,
}

#[async_trait]
impl BomTransaction for InMemoryBomTransaction {
    async fn find_or_create_component(&mut self, name: &str, uom: UnitOfMeasure) -> Result<Uuid> {
        if let Some((id, _)) = self.components.read().await.get(name) {
            return Ok(*id);
        }
        let (id, _) = self
            .new_components
            .entry(name.to_string())
            .or_insert_with(|| (Uuid::new_v4(), uom));
        Ok(*id)
    }

    async fn create_bom(
        &mut self,
        product_id: Uuid,
        code: &str,
        lines: Vec<BomLine>,
        operations: Vec<RoutingOperation>,
    ) -> Result<Uuid> {
        let record = validated_record(product_id, code, lines, operations)?;
        let id = record.id;
        self.new_boms.push(record);
        Ok(id)
    }

    async fn commit(&mut self) -> Result<()> {
        let mut components = self.components.write().await;
        for (name, entry) in self.new_components.drain() {
            components.entry(name).or_insert(entry);
        }
        self.boms.write().await.append(&mut self.new_boms);
        Ok(())
    }
}

/// Store backed by PostgreSQL.
pub struct PgBomStore {
    pool: PgPool,
    products: ProductRepository,
}

impl PgBomStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl BomStore for PgBomStore {
    async fn ping(&self) -> Result<()> {
        crate::postgres::health_check(&self.pool).await
    }

    async fn begin(&self) -> Result<Box<dyn BomTransaction>> {
        let tx = self.pool.begin().await.context("Failed to open transaction")?;
        Ok(Box::new(PgBomTransaction { tx: Some(tx) }))
    }

    async fn bom_exists(&self, product_id: Uuid) -> Result<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM boms WHERE product_id = $1)")
                .bind(product_id)
                .fetch_one(&self.pool)
                .await
                .context("Failed to check for existing BOM")?;

        Ok(exists)
    }

    async fn find_bom(&self, product_id: Uuid) -> Result<Option<BomRecord>> {
        let header: Option<BomHeaderRow> = sqlx::query_as(
            r#"
            SELECT id, product_id, code, product_qty, created_at
            FROM boms
            WHERE product_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch BOM header")?;

        let Some(header) = header else {
            return Ok(None);
        };

        let lines: Vec<BomLineRow> = sqlx::query_as(
            r#"
            SELECT l.component_id, p.name AS component_name, l.qty, l.uom
            FROM bom_lines l
            JOIN products p ON p.id = l.component_id
            WHERE l.bom_id = $1
            ORDER BY l.seq
            "#,
        )
        .bind(header.id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch BOM lines")?;

        let operations: Vec<BomOperationRow> = sqlx::query_as(
            r#"
            SELECT name, work_center_id
            FROM bom_operations
            WHERE bom_id = $1
            ORDER BY seq
            "#,
        )
        .bind(header.id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch BOM operations")?;

        Ok(Some(BomRecord {
            id: header.id,
            product_id: header.product_id,
            code: header.code,
            product_qty: header.product_qty,
            lines: lines.into_iter().map(Into::into).collect(),
            operations: operations.into_iter().map(Into::into).collect(),
            created_at: header.created_at,
        }))
    }


    async fn catalog(&self) -> Result<InMemoryCatalog> {
        self.products.catalog_snapshot().await
    }
}

/// One PostgreSQL transaction; rolled back by sqlx when dropped uncommitted.
pub struct PgBomTransaction {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgBomTransaction {
    fn conn(&mut self) -> Result<&mut PgConnection> {
        self.tx
            .as_deref_mut()
            .ok_or_else(|| anyhow!("BOM transaction already committed"))
    }
}

#[async_trait]
impl BomTransaction for PgBomTransaction {
    async fn find_or_create_component(&mut self, name: &str, uom: UnitOfMeasure) -> Result<Uuid> {
        ProductRepository::find_or_create(self.conn()?, name, uom).await
    }

    async fn create_bom(
        &mut self,
        product_id: Uuid,
        code: &str,
        lines: Vec<BomLine>,
        operations: Vec<RoutingOperation>,
    ) -> Result<Uuid> {
        let record = validated_record(product_id, code, lines, operations)?;
        let conn = self.conn()?;

        sqlx::query(
            r#"
            INSERT INTO boms (id, product_id, code, product_qty, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id)
        .bind(record.product_id)
        .bind(&record.code)
        .bind(record.product_qty)
        .bind(record.created_at)
        .execute(&mut *conn)
        .await
        .context("Failed to create BOM header")?;

        for (seq, line) in record.lines.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO bom_lines (bom_id, seq, component_id, qty, uom)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(record.id)
            .bind(seq as i32)
            .bind(line.component_id)
            .bind(line.qty)
            .bind(line.uom.as_str())
            .execute(&mut *conn)
            .await
            .context("Failed to create BOM line")?;
        }

        for (seq, operation) in record.operations.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO bom_operations (bom_id, seq, name, work_center_id)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(record.id)
            .bind(seq as i32)
            .bind(&operation.name)
            .bind(operation.work_center_id as i32)
            .execute(&mut *conn)
            .await
            .context("Failed to create BOM operation")?;
        }

        tracing::info!(bom_id = %record.id, product_id = %product_id, lines = record.lines.len(), "BOM written");
        Ok(record.id)
    }

    async fn commit(&mut self) -> Result<()> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| anyhow!("BOM transaction already committed"))?;
        tx.commit().await.context("Failed to commit BOM")
    }
}

#[derive(Debug, FromRow)]
struct BomHeaderRow {
    id: Uuid,
    product_id: Uuid,
    code: String,
    product_qty: f64,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct BomLineRow {
    component_id: Uuid,
    component_name: String,
    qty: f64,
    uom: String,
}

impl From<BomLineRow> for BomLine {
    fn from(row: BomLineRow) -> Self {
        Self {
            component_id: row.component_id,
            component_name: row.component_name,
            qty: row.qty,
            uom: UnitOfMeasure::from_code(&row.uom),
        }
    }
}

#[derive(Debug, FromRow)]
struct BomOperationRow {
    name: String,
    work_center_id: i32,
}

impl From<BomOperationRow> for RoutingOperation {
    fn from(row: BomOperationRow) -> Self {
        RoutingOperation::new(row.name, row.work_center_id.max(0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::catalog::ProductCatalog;

    fn line(id: Uuid, name: &str, qty: f64) -> BomLine {
        BomLine {
            component_id: id,
            component_name: name.to_string(),
            qty,
            uom: UnitOfMeasure::Unit,
        }
    }

    #[tokio::test]
    async fn test_find_or_create_is_idempotent() {
        let store = InMemoryBomStore::new();
        let mut tx = store.begin().await.unwrap();
        let first = tx
            .find_or_create_component("Drive Head - 130mm Square", UnitOfMeasure::Unit)
            .await
            .unwrap();
        let second = tx
            .find_or_create_component("Drive Head - 130mm Square", UnitOfMeasure::Unit)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.component_count().await, 1);
    }

    #[tokio::test]
    async fn test_create_and_find_bom() {
        let store = InMemoryBomStore::new();
        let product_id = Uuid::new_v4();
        assert!(!store.bom_exists(product_id).await.unwrap());

        let mut tx = store.begin().await.unwrap();
        let head = tx
            .find_or_create_component("Drive Head - 130mm Square", UnitOfMeasure::Unit)
            .await
            .unwrap();
        let bom_id = tx
            .create_bom(
                product_id,
                "Bored Pile Auger (1200mm, Dual Rock)",
                vec![line(head, "Drive Head - 130mm Square", 1.0)],
                vec![RoutingOperation::new("Tacking", 1)],
            )
            .await
            .unwrap();
        assert!(!store.bom_exists(product_id).await.unwrap());
        tx.commit().await.unwrap();

        assert!(store.bom_exists(product_id).await.unwrap());
        let bom = store.find_bom(product_id).await.unwrap().unwrap();
        assert_eq!(bom.id, bom_id);
        assert_eq!(bom.product_qty, 1.0);
        assert_eq!(bom.operations[0].work_center_id, 1);
    }

    #[tokio::test]
    async fn test_invalid_bom_is_not_written() {
        let store = InMemoryBomStore::new();
        let mut tx = store.begin().await.unwrap();
        let result = tx.create_bom(Uuid::new_v4(), "", vec![], vec![]).await;

        assert!(result.is_err());
        assert_eq!(store.bom_count().await, 0);
    }

    #[test]
    fn test_dropped_transaction_leaves_no_components() {
        let store = InMemoryBomStore::with_products(["Drive Head - 130mm Square"]);
        tokio_test::block_on(async {
            let mut tx = store.begin().await.unwrap();
            tx.find_or_create_component("Gusset - 130mm Drive 219mm Tube", UnitOfMeasure::Unit)
                .await
                .unwrap();
            let catalog = store.catalog().await.unwrap();
            assert!(!catalog.exists("Gusset - 130mm Drive 219mm Tube"));
        });
        assert_eq!(tokio_test::block_on(store.component_count()), 1);
    }

    #[test]
    fn test_catalog_reflects_seeded_products() {
        let store = InMemoryBomStore::with_products(["Flight - OD880 ID152 P330 T32 RH "]);
        let catalog = tokio_test::block_on(store.catalog()).unwrap();
        assert!(catalog.exists("Flight - OD880 ID152 P330 T32 RH "));
    }
}
