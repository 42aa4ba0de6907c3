use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use business::domain::errors::RepositoryError;
use business::domain::ingredient::repository::StockRepository;
use business::domain::ingredient::stock::{NewStockEntry, PRICE_HISTORY_LENGTH, plan_removal};

use super::entity::StockRowEntity;
use crate::db::map_db_error;

pub struct StockRepositoryPostgres {
    pool: PgPool,
}

impl StockRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Takes `amount` of an ingredient out of stock, most recent purchase first.
///
/// Locks the ingredient's rows for the rest of the caller's transaction.
/// Returns `InsufficientStock` without writing anything when short.
pub(crate) async fn consume_stock(
    conn: &mut PgConnection,
    ingredient_id: i32,
    amount: f64,
) -> Result<(), RepositoryError> {
    let rows = sqlx::query_as::<_, StockRowEntity>(
        r#"SELECT id, amount_left, time_bought FROM stock
        WHERE ingredient = $1 AND amount_left > 0
        ORDER BY time_bought DESC
        FOR UPDATE"#,
    )
    .bind(ingredient_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?
    .into_iter()
    .map(|e| e.into_domain())
    .collect::<Vec<_>>();

    let plan = plan_removal(&rows, amount).ok_or(RepositoryError::InsufficientStock)?;
    for deduction in plan {
        sqlx::query("UPDATE stock SET amount_left = GREATEST(amount_left - $1, 0) WHERE id = $2")
            .bind(deduction.amount)
            .bind(deduction.stock_id)
            .execute(&mut *conn)
            .await
            .map_err(map_db_error)?;
    }
    Ok(())
}

#[async_trait]
impl StockRepository for StockRepositoryPostgres {
    async fn average_price(&self, ingredient_id: i32) -> Result<Option<f64>, RepositoryError> {
        sqlx::query_scalar(
            r#"SELECT AVG(price) FROM (
                SELECT price FROM stock
                WHERE ingredient = $1
                ORDER BY time_bought DESC
                LIMIT $2
            ) AS recent"#,
        )
        .bind(ingredient_id)
        .bind(PRICE_HISTORY_LENGTH)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn in_stock(&self, ingredient_id: i32) -> Result<f64, RepositoryError> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount_left), 0)::DOUBLE PRECISION FROM stock WHERE ingredient = $1 AND amount_left > 0",
        )
        .bind(ingredient_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn stock_entries(&self, ingredient_id: i32) -> Result<i64, RepositoryError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM stock WHERE ingredient = $1 AND amount_left > 0")
            .bind(ingredient_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn add(&self, entry: &NewStockEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO stock (ingredient, amount_left, price, time_bought) VALUES ($1, $2, $3, $4)",
        )
        .bind(entry.ingredient_id)
        .bind(entry.amount)
        .bind(entry.price)
        .bind(entry.time_bought)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn remove(&self, ingredient_id: i32, amount: f64) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        consume_stock(&mut *tx, ingredient_id, amount).await?;
        tx.commit().await.map_err(map_db_error)?;

        tracing::debug!(ingredient_id, amount, "stock removed");
        Ok(())
    }
}
