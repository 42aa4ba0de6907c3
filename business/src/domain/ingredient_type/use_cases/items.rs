use async_trait::async_trait;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient_type::errors::IngredientTypeError;

pub struct GetIngredientTypeItemsParams {
    pub id: i32,
}

/// Lists every ingredient that belongs to a type.
#[async_trait]
pub trait GetIngredientTypeItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetIngredientTypeItemsParams,
    ) -> Result<Vec<Ingredient>, IngredientTypeError>;
}
