use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::recipe_category::model::{NewRecipeCategory, RecipeCategory};
use business::domain::recipe_category::repository::RecipeCategoryRepository;
use business::domain::shared::listing::NameQuery;

use super::entity::RecipeCategoryEntity;
use crate::db::{expect_affected, map_db_error};
use crate::listing::like_pattern;

pub struct RecipeCategoryRepositoryPostgres {
    pool: PgPool,
}

impl RecipeCategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeCategoryRepository for RecipeCategoryRepositoryPostgres {
    async fn get_by_id(&self, id: i32) -> Result<RecipeCategory, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeCategoryEntity>(
            "SELECT id, name FROM recipe_category WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<RecipeCategory>, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeCategoryEntity>(
            "SELECT id, name FROM recipe_category WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(
        &self,
        new_category: &NewRecipeCategory,
    ) -> Result<RecipeCategory, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM recipe_category WHERE name = $1)")
                .bind(&new_category.name)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;
        if taken {
            return Err(RepositoryError::Duplicated);
        }

        let entity = sqlx::query_as::<_, RecipeCategoryEntity>(
            "INSERT INTO recipe_category (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&new_category.name)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(entity.into_domain())
    }

    async fn rename(&self, id: i32, name: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE recipe_category SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        expect_affected(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM recipe_category WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        expect_affected(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM recipe_category")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn list(&self, query: &NameQuery) -> Result<Vec<RecipeCategory>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecipeCategoryEntity>(
            r#"SELECT id, name FROM recipe_category
            WHERE name ILIKE $1 ESCAPE '\'
            ORDER BY name ASC
            LIMIT $2 OFFSET $3"#,
        )
        .bind(like_pattern(&query.name))
        .bind(query.pagination.limit)
        .bind(query.pagination.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
