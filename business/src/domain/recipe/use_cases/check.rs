use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeAssessment;

pub struct CheckRecipeParams {
    pub name: String,
    pub portions: Option<i32>,
}

/// Tells whether a recipe can be cooked right now and what it costs.
#[async_trait]
pub trait CheckRecipeUseCase: Send + Sync {
    async fn execute(&self, params: CheckRecipeParams) -> Result<RecipeAssessment, RecipeError>;
}
