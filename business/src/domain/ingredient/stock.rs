use chrono::{DateTime, Utc};
use serde::Serialize;

use super::errors::IngredientError;

/// Number of most recent purchases averaged into an ingredient's price.
pub const PRICE_HISTORY_LENGTH: i64 = 30;

/// Amounts below this are treated as zero when consuming stock.
const EPSILON: f64 = 1e-9;

/// A purchase row that still has something left.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRow {
    pub id: i32,
    pub amount_left: f64,
    pub time_bought: DateTime<Utc>,
}

/// How much to take out of one stock row.
#[derive(Debug, Clone, PartialEq)]
pub struct StockDeduction {
    pub stock_id: i32,
    pub amount: f64,
}

/// Plans removing `amount` from `rows`, most recently bought first.
///
/// Each row gives up at most what it has left. Returns `None` when the rows
/// together hold less than `amount`, in which case nothing must be removed.
pub fn plan_removal(rows: &[StockRow], amount: f64) -> Option<Vec<StockDeduction>> {
    let mut ordered: Vec<&StockRow> = rows.iter().filter(|r| r.amount_left > 0.0).collect();
    ordered.sort_by(|a, b| b.time_bought.cmp(&a.time_bought));

    let mut remaining = amount;
    let mut plan = Vec::new();
    for row in ordered {
        if remaining <= EPSILON {
            break;
        }
        let taken = row.amount_left.min(remaining);
        plan.push(StockDeduction {
            stock_id: row.id,
            amount: taken,
        });
        remaining -= taken;
    }

    if remaining > EPSILON {
        return None;
    }
    Some(plan)
}

/// Stock aggregates for one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockSummary {
    /// Mean price of the last purchases, `None` without any purchase.
    pub average_price: Option<f64>,
    /// Total amount left over all purchases.
    pub in_stock: f64,
    /// Number of purchases with something left.
    pub stock_entries: i64,
}

/// Validated purchase about to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStockEntry {
    pub ingredient_id: i32,
    pub amount: f64,
    pub price: f64,
    pub time_bought: DateTime<Utc>,
}

impl NewStockEntry {
    pub fn new(
        ingredient_id: i32,
        amount: f64,
        price: f64,
        time_bought: Option<DateTime<Utc>>,
    ) -> Result<Self, IngredientError> {
        if !(amount.is_finite() && amount > 0.0) || !(price.is_finite() && price >= 0.0) {
            return Err(IngredientError::InvalidAmount);
        }
        Ok(Self {
            ingredient_id,
            amount,
            price,
            time_bought: time_bought.unwrap_or_else(Utc::now),
        })
    }
}

/// Rejects amounts that cannot be taken out of stock.
pub fn validate_removal(amount: f64) -> Result<f64, IngredientError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(IngredientError::InvalidAmount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    fn row(id: i32, amount_left: f64, time_bought: DateTime<Utc>) -> StockRow {
        StockRow {
            id,
            amount_left,
            time_bought,
        }
    }

    #[test]
    fn should_consume_most_recent_row_first() {
        let rows = vec![row(1, 5.0, at(8)), row(2, 3.0, at(12))];

        let plan = plan_removal(&rows, 6.0).unwrap();

        assert_eq!(
            plan,
            vec![
                StockDeduction {
                    stock_id: 2,
                    amount: 3.0
                },
                StockDeduction {
                    stock_id: 1,
                    amount: 3.0
                },
            ]
        );
        // Row 2 ends at 0, row 1 at 2.
        assert_eq!(3.0 - plan[0].amount, 0.0);
        assert_eq!(5.0 - plan[1].amount, 2.0);
    }

    #[test]
    fn should_take_partial_amount_from_single_row() {
        let rows = vec![row(1, 5.0, at(8)), row(2, 3.0, at(12))];

        let plan = plan_removal(&rows, 1.5).unwrap();

        assert_eq!(
            plan,
            vec![StockDeduction {
                stock_id: 2,
                amount: 1.5
            }]
        );
    }

    #[test]
    fn should_skip_empty_rows() {
        let rows = vec![row(1, 5.0, at(8)), row(2, 0.0, at(12))];

        let plan = plan_removal(&rows, 2.0).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].stock_id, 1);
    }

    #[test]
    fn should_refuse_when_stock_insufficient() {
        let rows = vec![row(1, 5.0, at(8)), row(2, 3.0, at(12))];
        assert!(plan_removal(&rows, 8.5).is_none());
        assert!(plan_removal(&[], 1.0).is_none());
    }

    #[test]
    fn should_reject_invalid_purchase() {
        assert!(NewStockEntry::new(1, 0.0, 2.0, None).is_err());
        assert!(NewStockEntry::new(1, 2.0, -1.0, None).is_err());
        assert!(NewStockEntry::new(1, f64::NAN, 1.0, None).is_err());
        assert!(NewStockEntry::new(1, 2.0, 0.0, Some(at(9))).is_ok());
    }

    #[test]
    fn should_reject_non_positive_removal() {
        assert!(validate_removal(0.0).is_err());
        assert!(validate_removal(-2.0).is_err());
        assert_eq!(validate_removal(2.0).unwrap(), 2.0);
    }

    fn rows_strategy() -> impl Strategy<Value = Vec<StockRow>> {
        prop::collection::vec((0u32..1000, 0.0f64..100.0), 0..12).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (minutes, amount))| {
                    row(i as i32, amount, at(0) + Duration::minutes(minutes as i64))
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn plan_removes_exactly_the_requested_amount(rows in rows_strategy(), amount in 0.01f64..500.0) {
            let available: f64 = rows.iter().map(|r| r.amount_left).sum();
            match plan_removal(&rows, amount) {
                Some(plan) => {
                    let removed: f64 = plan.iter().map(|d| d.amount).sum();
                    prop_assert!((removed - amount).abs() < 1e-6);
                }
                None => prop_assert!(available < amount + 1e-6),
            }
        }

        #[test]
        fn plan_never_overdraws_a_row(rows in rows_strategy(), amount in 0.01f64..500.0) {
            if let Some(plan) = plan_removal(&rows, amount) {
                for deduction in plan {
                    let source = rows.iter().find(|r| r.id == deduction.stock_id).unwrap();
                    prop_assert!(deduction.amount <= source.amount_left + 1e-9);
                    prop_assert!(deduction.amount > 0.0);
                }
            }
        }

        #[test]
        fn plan_follows_purchase_time_descending(rows in rows_strategy(), amount in 0.01f64..500.0) {
            if let Some(plan) = plan_removal(&rows, amount) {
                let times: Vec<_> = plan
                    .iter()
                    .map(|d| rows.iter().find(|r| r.id == d.stock_id).unwrap().time_bought)
                    .collect();
                prop_assert!(times.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }
}
