use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::{Ingredient, IngredientUpdate};

pub struct UpdateIngredientParams {
    pub id: i32,
    pub updates: Vec<IngredientUpdate>,
}

#[async_trait]
pub trait UpdateIngredientUseCase: Send + Sync {
    async fn execute(&self, params: UpdateIngredientParams) -> Result<Ingredient, IngredientError>;
}
