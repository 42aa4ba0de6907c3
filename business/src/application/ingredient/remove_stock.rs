use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ingredient::get_stock::load_summary;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::repository::{IngredientRepository, StockRepository};
use crate::domain::ingredient::stock::{StockSummary, validate_removal};
use crate::domain::ingredient::use_cases::remove_stock::{RemoveStockParams, RemoveStockUseCase};
use crate::domain::logger::Logger;

pub struct RemoveStockUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub stock_repository: Arc<dyn StockRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveStockUseCase for RemoveStockUseCaseImpl {
    async fn execute(&self, params: RemoveStockParams) -> Result<StockSummary, IngredientError> {
        let amount = validate_removal(params.amount)?;

        let ingredient = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(IngredientError::on_lookup)?;

        if let Err(e) = self.stock_repository.remove(ingredient.id, amount).await {
            self.logger.warn(&format!(
                "Could not remove {} {} of {}: {}",
                amount, ingredient.unit, ingredient, e
            ));
            return Err(IngredientError::on_lookup(e));
        }

        self.logger.info(&format!(
            "Removed {} {} of {}",
            amount, ingredient.unit, ingredient
        ));
        Ok(load_summary(self.stock_repository.as_ref(), ingredient.id).await?)
    }
}
