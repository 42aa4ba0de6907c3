use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub struct RecipeCategoryParams {
    pub name: String,
    pub category_id: i32,
}

#[async_trait]
pub trait RecipeCategoriesUseCase: Send + Sync {
    async fn add(&self, params: RecipeCategoryParams) -> Result<Recipe, RecipeError>;
    async fn remove(&self, params: RecipeCategoryParams) -> Result<Recipe, RecipeError>;
}
