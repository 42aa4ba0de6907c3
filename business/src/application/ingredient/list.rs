use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::{IngredientQuery, IngredientRepository};
use crate::domain::ingredient::use_cases::list::ListIngredientsUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::listing::Listing;

pub struct ListIngredientsUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListIngredientsUseCase for ListIngredientsUseCaseImpl {
    async fn execute(&self, query: IngredientQuery) -> Result<Listing<Ingredient>, IngredientError> {
        let total = self.repository.count().await?;
        let items = self.repository.list(&query).await?;

        self.logger.debug(&format!(
            "Listed {} of {} ingredients",
            items.len(),
            total
        ));
        Ok(Listing { total, items })
    }
}
