use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::model::IngredientType;
use crate::domain::shared::listing::{Listing, NameQuery};

#[async_trait]
pub trait ListIngredientTypesUseCase: Send + Sync {
    async fn execute(
        &self,
        query: NameQuery,
    ) -> Result<Listing<IngredientType>, IngredientTypeError>;
}
