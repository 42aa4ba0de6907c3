use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::ingredient_type::model::{IngredientType, NewIngredientType};
use business::domain::ingredient_type::repository::IngredientTypeRepository;
use business::domain::shared::listing::NameQuery;

use super::entity::IngredientTypeEntity;
use crate::db::{expect_affected, map_db_error};
use crate::listing::like_pattern;

const LIST_QUERY: &str = r#"SELECT id, name FROM ingredient_type
    WHERE name ILIKE $1 ESCAPE '\'
    ORDER BY name ASC
    LIMIT $2 OFFSET $3"#;

pub struct IngredientTypeRepositoryPostgres {
    pool: PgPool,
}

impl IngredientTypeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredientTypeRepository for IngredientTypeRepositoryPostgres {
    async fn get_by_id(&self, id: i32) -> Result<IngredientType, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientTypeEntity>(
            "SELECT id, name FROM ingredient_type WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<IngredientType>, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientTypeEntity>(
            "SELECT id, name FROM ingredient_type WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(
        &self,
        new_type: &NewIngredientType,
    ) -> Result<IngredientType, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM ingredient_type WHERE name = $1)")
                .bind(&new_type.name)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;
        if taken {
            return Err(RepositoryError::Duplicated);
        }

        let entity = sqlx::query_as::<_, IngredientTypeEntity>(
            "INSERT INTO ingredient_type (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&new_type.name)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(entity.into_domain())
    }

    async fn rename(&self, id: i32, name: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE ingredient_type SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        expect_affected(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM ingredient_type WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        expect_affected(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM ingredient_type")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn list(&self, query: &NameQuery) -> Result<Vec<IngredientType>, RepositoryError> {
        let entities = sqlx::query_as::<_, IngredientTypeEntity>(LIST_QUERY)
            .bind(like_pattern(&query.name))
            .bind(query.pagination.limit)
            .bind(query.pagination.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_by_name_ascending_after_filtering() {
        let filter = LIST_QUERY.find("ILIKE").unwrap();
        let order = LIST_QUERY.find("ORDER BY name ASC").unwrap();
        let page = LIST_QUERY.find("LIMIT $2 OFFSET $3").unwrap();
        assert!(filter < order && order < page);
    }
}
