use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::model::IngredientType;

pub struct GetIngredientTypeByIdParams {
    pub id: i32,
}

#[async_trait]
pub trait GetIngredientTypeByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetIngredientTypeByIdParams,
    ) -> Result<IngredientType, IngredientTypeError>;
}
