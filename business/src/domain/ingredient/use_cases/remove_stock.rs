use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::stock::StockSummary;

pub struct RemoveStockParams {
    pub id: i32,
    pub amount: f64,
}

/// Takes an amount out of stock and returns what is left.
#[async_trait]
pub trait RemoveStockUseCase: Send + Sync {
    async fn execute(&self, params: RemoveStockParams) -> Result<StockSummary, IngredientError>;
}
