use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;

pub struct CreateIngredientParams {
    pub name: String,
    pub unit: Option<String>,
    pub ingredient_type_id: Option<i32>,
    pub suggestion_threshold: Option<f64>,
    pub rebuy_threshold: Option<f64>,
    pub durability: Option<i32>,
}

#[async_trait]
pub trait CreateIngredientUseCase: Send + Sync {
    async fn execute(&self, params: CreateIngredientParams) -> Result<Ingredient, IngredientError>;
}
