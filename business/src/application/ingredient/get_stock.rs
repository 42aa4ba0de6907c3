use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::repository::{IngredientRepository, StockRepository};
use crate::domain::ingredient::stock::StockSummary;
use crate::domain::ingredient::use_cases::get_stock::{
    GetIngredientStockParams, GetIngredientStockUseCase,
};
use crate::domain::logger::Logger;

/// Collects the stock aggregates of one ingredient.
pub(crate) async fn load_summary(
    stock_repository: &dyn StockRepository,
    ingredient_id: i32,
) -> Result<StockSummary, RepositoryError> {
    Ok(StockSummary {
        average_price: stock_repository.average_price(ingredient_id).await?,
        in_stock: stock_repository.in_stock(ingredient_id).await?,
        stock_entries: stock_repository.stock_entries(ingredient_id).await?,
    })
}

pub struct GetIngredientStockUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub stock_repository: Arc<dyn StockRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetIngredientStockUseCase for GetIngredientStockUseCaseImpl {
    async fn execute(
        &self,
        params: GetIngredientStockParams,
    ) -> Result<StockSummary, IngredientError> {
        let ingredient = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(IngredientError::on_lookup)?;

        let summary = load_summary(self.stock_repository.as_ref(), ingredient.id).await?;
        self.logger.debug(&format!(
            "{} has {} {} in stock",
            ingredient, summary.in_stock, ingredient.unit
        ));
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockIngredientRepo, MockStockRepo, ingredient, mock_logger};

    #[tokio::test]
    async fn should_aggregate_stock_of_ingredient() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(ingredient(id, "Egg")));
        let mut stock_repo = MockStockRepo::new();
        stock_repo
            .expect_average_price()
            .withf(|id| *id == 1)
            .returning(|_| Ok(Some(0.25)));
        stock_repo.expect_in_stock().returning(|_| Ok(12.0));
        stock_repo.expect_stock_entries().returning(|_| Ok(2));

        let use_case = GetIngredientStockUseCaseImpl {
            repository: Arc::new(mock_repo),
            stock_repository: Arc::new(stock_repo),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(GetIngredientStockParams { id: 1 })
            .await
            .unwrap();

        assert_eq!(
            summary,
            StockSummary {
                average_price: Some(0.25),
                in_stock: 12.0,
                stock_entries: 2,
            }
        );
    }

    #[tokio::test]
    async fn should_report_no_price_without_purchases() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(ingredient(id, "Egg")));
        let mut stock_repo = MockStockRepo::new();
        stock_repo.expect_average_price().returning(|_| Ok(None));
        stock_repo.expect_in_stock().returning(|_| Ok(0.0));
        stock_repo.expect_stock_entries().returning(|_| Ok(0));

        let use_case = GetIngredientStockUseCaseImpl {
            repository: Arc::new(mock_repo),
            stock_repository: Arc::new(stock_repo),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(GetIngredientStockParams { id: 1 })
            .await
            .unwrap();

        assert_eq!(summary.average_price, None);
        assert_eq!(summary.in_stock, 0.0);
    }

    #[tokio::test]
    async fn should_fail_for_unknown_ingredient() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut stock_repo = MockStockRepo::new();
        stock_repo.expect_in_stock().never();

        let use_case = GetIngredientStockUseCaseImpl {
            repository: Arc::new(mock_repo),
            stock_repository: Arc::new(stock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetIngredientStockParams { id: 1 }).await;

        assert!(matches!(result.unwrap_err(), IngredientError::DoesNotExist));
    }
}
