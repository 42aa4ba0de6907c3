use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::stock::StockSummary;

pub struct AddStockParams {
    pub id: i32,
    pub amount: f64,
    pub price: f64,
    pub time_bought: Option<DateTime<Utc>>,
}

/// Records a purchase and returns the updated stock.
#[async_trait]
pub trait AddStockUseCase: Send + Sync {
    async fn execute(&self, params: AddStockParams) -> Result<StockSummary, IngredientError>;
}
