//! Schema bootstrap for the products table

use sqlx::PgPool;

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL,
        name TEXT NOT NULL,
        price NUMERIC(10,2) NOT NULL DEFAULT 0.00,
        CONSTRAINT products_pkey PRIMARY KEY (id)
    )
"#;

/// Create the `products` table if it does not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring products table exists");
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(pool).await?;
    Ok(())
}

/// Delete every product and restart the id sequence at 1.
///
/// Two statements, not atomic. Intended for test fixtures and
/// local resets only.
pub async fn clear_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM products").execute(pool).await?;
    sqlx::query("ALTER SEQUENCE products_id_seq RESTART WITH 1")
        .execute(pool)
        .await?;
    Ok(())
}
