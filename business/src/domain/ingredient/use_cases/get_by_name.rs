use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;

pub struct GetIngredientByNameParams {
    pub name: String,
}

#[async_trait]
pub trait GetIngredientByNameUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetIngredientByNameParams,
    ) -> Result<Ingredient, IngredientError>;
}
