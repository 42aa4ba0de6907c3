use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;

pub struct DeleteIngredientParams {
    pub id: i32,
}

#[async_trait]
pub trait DeleteIngredientUseCase: Send + Sync {
    async fn execute(&self, params: DeleteIngredientParams) -> Result<(), IngredientError>;
}
