use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::model::IngredientType;

pub struct CreateIngredientTypeParams {
    pub name: String,
}

#[async_trait]
pub trait CreateIngredientTypeUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateIngredientTypeParams,
    ) -> Result<IngredientType, IngredientTypeError>;
}
