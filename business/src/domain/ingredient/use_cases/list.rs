use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientQuery;
use crate::domain::shared::listing::Listing;

#[async_trait]
pub trait ListIngredientsUseCase: Send + Sync {
    async fn execute(&self, query: IngredientQuery) -> Result<Listing<Ingredient>, IngredientError>;
}
