use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub struct AddRecipeIngredientParams {
    pub name: String,
    pub ingredient_id: i32,
    pub amount: f64,
}

pub struct RemoveRecipeIngredientParams {
    pub name: String,
    pub ingredient_id: i32,
}

/// Manages which ingredients, and how much of each, a recipe uses.
#[async_trait]
pub trait RecipeIngredientsUseCase: Send + Sync {
    async fn add(&self, params: AddRecipeIngredientParams) -> Result<Recipe, RecipeError>;
    async fn remove(&self, params: RemoveRecipeIngredientParams) -> Result<Recipe, RecipeError>;
}
