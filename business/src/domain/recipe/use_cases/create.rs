use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub struct CreateRecipeParams {
    pub name: String,
    pub directions: Option<String>,
    pub picture: Option<String>,
    pub prepare_time: Option<i32>,
    pub portions: Option<i32>,
}

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: CreateRecipeParams) -> Result<Recipe, RecipeError>;
}
