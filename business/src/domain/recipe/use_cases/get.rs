use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub struct GetRecipeParams {
    pub name: String,
    /// Rescales ingredient amounts when it differs from the stored portions.
    pub portions: Option<i32>,
}

#[async_trait]
pub trait GetRecipeUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipeParams) -> Result<Recipe, RecipeError>;
}
