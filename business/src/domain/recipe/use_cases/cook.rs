use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeAssessment;

pub struct CookRecipeParams {
    pub name: String,
    pub portions: Option<i32>,
}

#[async_trait]
pub trait CookRecipeUseCase: Send + Sync {
    async fn execute(&self, params: CookRecipeParams) -> Result<RecipeAssessment, RecipeError>;
}
