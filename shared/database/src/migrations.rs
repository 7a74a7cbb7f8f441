use anyhow::Result;
use sqlx::PgPool;

pub async fn run_postgres_migrations(pool: &PgPool) -> Result<()> {
    tracing::info!("Running PostgreSQL migrations");

    // Component and finished products share one table, keyed by name
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR NOT NULL UNIQUE,
            uom VARCHAR NOT NULL DEFAULT 'unit',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS boms (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            product_id UUID NOT NULL,
            code VARCHAR NOT NULL,
            product_qty DOUBLE PRECISION NOT NULL DEFAULT 1.0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bom_lines (
            bom_id UUID NOT NULL REFERENCES boms(id) ON DELETE CASCADE,
            seq INTEGER NOT NULL,
            component_id UUID NOT NULL REFERENCES products(id),
            qty DOUBLE PRECISION NOT NULL,
            uom VARCHAR NOT NULL,
            PRIMARY KEY (bom_id, seq)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bom_operations (
            bom_id UUID NOT NULL REFERENCES boms(id) ON DELETE CASCADE,
            seq INTEGER NOT NULL,
            name VARCHAR NOT NULL,
            work_center_id INTEGER NOT NULL,
            PRIMARY KEY (bom_id, seq)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_boms_product_id ON boms(product_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_name_prefix ON products(name varchar_pattern_ops)")
        .execute(pool)
        .await?;

    tracing::info!("PostgreSQL migrations completed successfully");
    Ok(())
}
