use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ingredient::get_stock::load_summary;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::repository::{IngredientRepository, StockRepository};
use crate::domain::ingredient::stock::{NewStockEntry, StockSummary};
use crate::domain::ingredient::use_cases::add_stock::{AddStockParams, AddStockUseCase};
use crate::domain::logger::Logger;

pub struct AddStockUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub stock_repository: Arc<dyn StockRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddStockUseCase for AddStockUseCaseImpl {
    async fn execute(&self, params: AddStockParams) -> Result<StockSummary, IngredientError> {
        let entry = NewStockEntry::new(params.id, params.amount, params.price, params.time_bought)?;

        let ingredient = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(IngredientError::on_lookup)?;

        self.stock_repository
            .add(&entry)
            .await
            .map_err(IngredientError::on_lookup)?;

        self.logger.info(&format!(
            "Added {} {} of {} for {}",
            entry.amount, ingredient.unit, ingredient, entry.price
        ));
        Ok(load_summary(self.stock_repository.as_ref(), ingredient.id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockIngredientRepo, MockStockRepo, ingredient, mock_logger};

    #[tokio::test]
    async fn should_record_purchase_and_return_new_level() {
        let bought = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(ingredient(id, "Egg")));
        let mut stock_repo = MockStockRepo::new();
        stock_repo
            .expect_add()
            .withf(move |entry| {
                entry.ingredient_id == 1
                    && entry.amount == 6.0
                    && entry.price == 1.8
                    && entry.time_bought == bought
            })
            .times(1)
            .returning(|_| Ok(()));
        stock_repo.expect_average_price().returning(|_| Ok(Some(1.8)));
        stock_repo.expect_in_stock().returning(|_| Ok(6.0));
        stock_repo.expect_stock_entries().returning(|_| Ok(1));

        let use_case = AddStockUseCaseImpl {
            repository: Arc::new(mock_repo),
            stock_repository: Arc::new(stock_repo),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(AddStockParams {
                id: 1,
                amount: 6.0,
                price: 1.8,
                time_bought: Some(bought),
            })
            .await
            .unwrap();

        assert_eq!(summary.in_stock, 6.0);
        assert_eq!(summary.stock_entries, 1);
    }

    #[tokio::test]
    async fn should_reject_non_positive_amount() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo.expect_get_by_id().never();
        let mut stock_repo = MockStockRepo::new();
        stock_repo.expect_add().never();

        let use_case = AddStockUseCaseImpl {
            repository: Arc::new(mock_repo),
            stock_repository: Arc::new(stock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddStockParams {
                id: 1,
                amount: 0.0,
                price: 1.0,
                time_bought: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), IngredientError::InvalidAmount));
    }

    #[tokio::test]
    async fn should_fail_for_unknown_ingredient() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut stock_repo = MockStockRepo::new();
        stock_repo.expect_add().never();

        let use_case = AddStockUseCaseImpl {
            repository: Arc::new(mock_repo),
            stock_repository: Arc::new(stock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddStockParams {
                id: 1,
                amount: 2.0,
                price: 1.0,
                time_bought: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), IngredientError::DoesNotExist));
    }
}
