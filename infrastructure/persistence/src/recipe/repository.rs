use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use business::domain::errors::RepositoryError;
use business::domain::recipe::model::{CookingRecord, NewRecipe, Recipe};
use business::domain::recipe::repository::RecipeRepository;

use super::entity::{RecipeEntity, RecipeIngredientEntity};
use crate::db::{expect_affected, map_db_error};
use crate::ingredient::entity::INGREDIENT_COLUMNS;
use crate::recipe_category::entity::RecipeCategoryEntity;
use crate::stock::repository::consume_stock;

const RECIPE_COLUMNS: &str = "r.id AS name, r.directions, r.picture, r.prepare_time, r.portions";

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Attaches ingredients (in insertion order) and categories to a recipe row.
async fn hydrate(conn: &mut PgConnection, entity: RecipeEntity) -> Result<Recipe, RepositoryError> {
    let ingredients = sqlx::query_as::<_, RecipeIngredientEntity>(&format!(
        r#"SELECT ri.amount, {INGREDIENT_COLUMNS}
        FROM recipe_ingredients ri
        JOIN ingredient i ON i.id = ri.ingredient
        JOIN ingredient_type t ON t.id = i.ingredient_type
        WHERE ri.recipe = $1
        ORDER BY ri.position ASC"#
    ))
    .bind(&entity.name)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    let categories = sqlx::query_as::<_, RecipeCategoryEntity>(
        r#"SELECT c.id, c.name
        FROM categorized_recipes cr
        JOIN recipe_category c ON c.id = cr.category
        WHERE cr.recipe = $1
        ORDER BY c.name ASC"#,
    )
    .bind(&entity.name)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_db_error)?;

    Ok(entity.into_domain(
        ingredients.into_iter().map(|e| e.into_domain()).collect(),
        categories.into_iter().map(|e| e.into_domain()).collect(),
    ))
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn get_by_name(&self, name: &str) -> Result<Recipe, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        let entity = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipe r WHERE r.id = $1"
        ))
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?
        .ok_or(RepositoryError::NotFound)?;

        hydrate(&mut conn, entity).await
    }

    async fn exists(&self, name: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM recipe WHERE id = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn create(&self, new_recipe: &NewRecipe) -> Result<Recipe, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let taken: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM recipe WHERE id = $1)")
            .bind(&new_recipe.name)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;
        if taken {
            return Err(RepositoryError::Duplicated);
        }

        let entity = sqlx::query_as::<_, RecipeEntity>(
            r#"INSERT INTO recipe (id, directions, picture, prepare_time, portions)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id AS name, directions, picture, prepare_time, portions"#,
        )
        .bind(&new_recipe.name)
        .bind(&new_recipe.directions)
        .bind(&new_recipe.picture)
        .bind(new_recipe.prepare_time)
        .bind(new_recipe.portions)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(entity.into_domain(Vec::new(), Vec::new()))
    }

    async fn delete(&self, name: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM recipe WHERE id = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        expect_affected(result.rows_affected())
    }

    async fn add_ingredient(
        &self,
        name: &str,
        ingredient_id: i32,
        amount: f64,
    ) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO recipe_ingredients (recipe, ingredient, amount) VALUES ($1, $2, $3)")
            .bind(name)
            .bind(ingredient_id)
            .bind(amount)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    async fn remove_ingredient(
        &self,
        name: &str,
        ingredient_id: i32,
    ) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("DELETE FROM recipe_ingredients WHERE recipe = $1 AND ingredient = $2")
                .bind(name)
                .bind(ingredient_id)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        expect_affected(result.rows_affected())
    }

    async fn add_category(&self, name: &str, category_id: i32) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO categorized_recipes (recipe, category) VALUES ($1, $2)")
            .bind(name)
            .bind(category_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    async fn remove_category(&self, name: &str, category_id: i32) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("DELETE FROM categorized_recipes WHERE recipe = $1 AND category = $2")
                .bind(name)
                .bind(category_id)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        expect_affected(result.rows_affected())
    }

    async fn get_by_category(&self, category_id: i32) -> Result<Vec<Recipe>, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        let entities = sqlx::query_as::<_, RecipeEntity>(&format!(
            r#"SELECT {RECIPE_COLUMNS}
            FROM recipe r
            JOIN categorized_recipes cr ON cr.recipe = r.id
            WHERE cr.category = $1
            ORDER BY r.id ASC"#
        ))
        .bind(category_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

        let mut recipes = Vec::with_capacity(entities.len());
        for entity in entities {
            recipes.push(hydrate(&mut conn, entity).await?);
        }
        Ok(recipes)
    }

    async fn record_cooking(&self, record: &CookingRecord) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("INSERT INTO recipe_made (recipe, portions, price) VALUES ($1, $2, $3)")
            .bind(&record.recipe_name)
            .bind(record.portions)
            .bind(record.price)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for consumption in &record.consumption {
            consume_stock(&mut *tx, consumption.ingredient_id, consumption.amount).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        tracing::debug!(recipe = %record.recipe_name, portions = record.portions, "cooking recorded");
        Ok(())
    }
}
