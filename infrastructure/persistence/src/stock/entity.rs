use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::ingredient::stock::StockRow;

#[derive(Debug, FromRow)]
pub struct StockRowEntity {
    pub id: i32,
    pub amount_left: f64,
    pub time_bought: DateTime<Utc>,
}

impl StockRowEntity {
    pub fn into_domain(self) -> StockRow {
        StockRow {
            id: self.id,
            amount_left: self.amount_left,
            time_bought: self.time_bought,
        }
    }
}
