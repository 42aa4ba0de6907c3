use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::{Ingredient, IngredientUpdate, NewIngredient};
use business::domain::ingredient::repository::{IngredientQuery, IngredientRepository};

use super::entity::{INGREDIENT_COLUMNS, IngredientEntity};
use crate::db::{expect_affected, map_db_error};
use crate::listing::like_pattern;

pub struct IngredientRepositoryPostgres {
    pool: PgPool,
}

impl IngredientRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn fetch_by_id(
    conn: &mut PgConnection,
    id: i32,
) -> Result<Option<IngredientEntity>, RepositoryError> {
    sqlx::query_as::<_, IngredientEntity>(&format!(
        "SELECT {INGREDIENT_COLUMNS} FROM ingredient i JOIN ingredient_type t ON t.id = i.ingredient_type WHERE i.id = $1"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(map_db_error)
}

async fn apply_update(
    conn: &mut PgConnection,
    id: i32,
    update: &IngredientUpdate,
) -> Result<(), RepositoryError> {
    let statement = match update {
        IngredientUpdate::Name(name) => {
            sqlx::query("UPDATE ingredient SET name = $1 WHERE id = $2").bind(name.as_str())
        }
        IngredientUpdate::Unit(unit) => {
            sqlx::query("UPDATE ingredient SET unit = $1 WHERE id = $2").bind(unit.as_str())
        }
        IngredientUpdate::Type(type_id) => {
            sqlx::query("UPDATE ingredient SET ingredient_type = $1 WHERE id = $2").bind(*type_id)
        }
        IngredientUpdate::SuggestionThreshold(value) => {
            sqlx::query("UPDATE ingredient SET suggestion_threshold = $1 WHERE id = $2")
                .bind(*value)
        }
        IngredientUpdate::RebuyThreshold(value) => {
            sqlx::query("UPDATE ingredient SET rebuy_threshold = $1 WHERE id = $2").bind(*value)
        }
        IngredientUpdate::Durability(days) => {
            sqlx::query("UPDATE ingredient SET durability = $1 WHERE id = $2").bind(*days)
        }
    };

    let result = statement
        .bind(id)
        .execute(conn)
        .await
        .map_err(map_db_error)?;
    expect_affected(result.rows_affected())
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryPostgres {
    async fn get_by_id(&self, id: i32) -> Result<Ingredient, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        let entity = fetch_by_id(&mut conn, id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientEntity>(&format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredient i JOIN ingredient_type t ON t.id = i.ingredient_type WHERE i.name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(&self, new_ingredient: &NewIngredient) -> Result<Ingredient, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM ingredient WHERE name = $1)")
                .bind(&new_ingredient.name)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;
        if taken {
            return Err(RepositoryError::Duplicated);
        }

        let id: i32 = sqlx::query_scalar(
            r#"INSERT INTO ingredient (name, unit, ingredient_type, suggestion_threshold, rebuy_threshold, durability)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id"#,
        )
        .bind(&new_ingredient.name)
        .bind(&new_ingredient.unit)
        .bind(new_ingredient.ingredient_type_id)
        .bind(new_ingredient.suggestion_threshold)
        .bind(new_ingredient.rebuy_threshold)
        .bind(new_ingredient.durability)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let entity = fetch_by_id(&mut tx, id)
            .await?
            .ok_or(RepositoryError::Persistence)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: i32, updates: &[IngredientUpdate]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        for update in updates {
            apply_update(&mut tx, id, update).await?;
        }
        tx.commit().await.map_err(map_db_error)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM ingredient WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        expect_affected(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM ingredient")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn list(&self, query: &IngredientQuery) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = sqlx::query_as::<_, IngredientEntity>(&format!(
            r#"SELECT {INGREDIENT_COLUMNS}
            FROM ingredient i JOIN ingredient_type t ON t.id = i.ingredient_type
            WHERE i.name ILIKE $1 ESCAPE '\'
              AND i.unit ILIKE $2 ESCAPE '\'
              AND t.name ILIKE $3 ESCAPE '\'
            ORDER BY i.name ASC
            LIMIT $4 OFFSET $5"#
        ))
        .bind(like_pattern(&query.name))
        .bind(like_pattern(&query.unit))
        .bind(like_pattern(&query.ingredient_type))
        .bind(query.pagination.limit)
        .bind(query.pagination.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_type(&self, ingredient_type_id: i32) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = sqlx::query_as::<_, IngredientEntity>(&format!(
            "SELECT {INGREDIENT_COLUMNS} FROM ingredient i JOIN ingredient_type t ON t.id = i.ingredient_type WHERE i.ingredient_type = $1 ORDER BY i.name ASC"
        ))
        .bind(ingredient_type_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
