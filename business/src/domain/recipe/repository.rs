use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{CookingRecord, NewRecipe, Recipe};

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Loads the recipe with its ingredients and categories.
    async fn get_by_name(&self, name: &str) -> Result<Recipe, RepositoryError>;
    async fn exists(&self, name: &str) -> Result<bool, RepositoryError>;
    /// Inserts the recipe unless the name is taken (`Duplicated`).
    async fn create(&self, new_recipe: &NewRecipe) -> Result<Recipe, RepositoryError>;
    async fn delete(&self, name: &str) -> Result<(), RepositoryError>;
    /// `Duplicated` when the ingredient is already part of the recipe.
    async fn add_ingredient(
        &self,
        name: &str,
        ingredient_id: i32,
        amount: f64,
    ) -> Result<(), RepositoryError>;
    /// `NotFound` when the ingredient is not part of the recipe.
    async fn remove_ingredient(&self, name: &str, ingredient_id: i32)
    -> Result<(), RepositoryError>;
    async fn add_category(&self, name: &str, category_id: i32) -> Result<(), RepositoryError>;
    async fn remove_category(&self, name: &str, category_id: i32) -> Result<(), RepositoryError>;
    async fn get_by_category(&self, category_id: i32) -> Result<Vec<Recipe>, RepositoryError>;
    /// Logs the cooking and consumes stock in one transaction.
    /// `InsufficientStock` rolls everything back.
    async fn record_cooking(&self, record: &CookingRecord) -> Result<(), RepositoryError>;
}
