use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::stock::StockSummary;

pub struct GetIngredientStockParams {
    pub id: i32,
}

#[async_trait]
pub trait GetIngredientStockUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetIngredientStockParams,
    ) -> Result<StockSummary, IngredientError>;
}
