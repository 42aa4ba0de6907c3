use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;

pub struct GetIngredientByIdParams {
    pub id: i32,
}

#[async_trait]
pub trait GetIngredientByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetIngredientByIdParams) -> Result<Ingredient, IngredientError>;
}
