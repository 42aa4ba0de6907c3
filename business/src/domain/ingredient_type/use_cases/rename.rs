use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::model::IngredientType;

pub struct RenameIngredientTypeParams {
    pub id: i32,
    pub new_name: String,
}

#[async_trait]
pub trait RenameIngredientTypeUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RenameIngredientTypeParams,
    ) -> Result<IngredientType, IngredientTypeError>;
}
