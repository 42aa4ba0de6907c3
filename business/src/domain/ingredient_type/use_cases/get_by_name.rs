use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::model::IngredientType;

pub struct GetIngredientTypeByNameParams {
    pub name: String,
}

#[async_trait]
pub trait GetIngredientTypeByNameUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetIngredientTypeByNameParams,
    ) -> Result<IngredientType, IngredientTypeError>;
}
