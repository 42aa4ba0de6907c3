use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;

pub struct DeleteIngredientTypeParams {
    pub id: i32,
}

#[async_trait]
pub trait DeleteIngredientTypeUseCase: Send + Sync {
    async fn execute(&self, params: DeleteIngredientTypeParams) -> Result<(), IngredientTypeError>;
}
