use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::listing::NameQuery;

use super::model::{NewRecipeCategory, RecipeCategory};

#[async_trait]
pub trait RecipeCategoryRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<RecipeCategory, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<RecipeCategory>, RepositoryError>;
    async fn create(
        &self,
        new_category: &NewRecipeCategory,
    ) -> Result<RecipeCategory, RepositoryError>;
    async fn rename(&self, id: i32, name: &str) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
    /// One page of categories matching the filter, ordered by name ascending.
    async fn list(&self, query: &NameQuery) -> Result<Vec<RecipeCategory>, RepositoryError>;
}
