use std::sync::Arc;

use async_trait::async_trait;

use crate::application::recipe::levels::ingredient_levels;
use crate::domain::ingredient::repository::StockRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{CookingRecord, RecipeAssessment};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::cook::{CookRecipeParams, CookRecipeUseCase};

pub struct CookRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub stock_repository: Arc<dyn StockRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CookRecipeUseCase for CookRecipeUseCaseImpl {
    async fn execute(&self, params: CookRecipeParams) -> Result<RecipeAssessment, RecipeError> {
        let recipe = self
            .repository
            .get_by_name(params.name.trim())
            .await
            .map_err(RecipeError::on_lookup)?
            .scaled_to(params.portions)?;

        let levels = ingredient_levels(self.stock_repository.as_ref(), &recipe).await?;
        let assessment = recipe.assess(&levels);
        if !assessment.can_be_cooked {
            self.logger.warn(&format!(
                "Cannot cook {}: {} ingredient(s) short",
                recipe,
                assessment.shortages.len()
            ));
            return Err(RecipeError::NotEnoughIngredients);
        }

        // Stock may have moved since the check; the store re-verifies inside its transaction.
        let record = CookingRecord::new(&recipe, assessment.current_price);
        self.repository
            .record_cooking(&record)
            .await
            .map_err(RecipeError::on_lookup)?;

        self.logger.info(&format!(
            "Cooked {} portions of {} for {:.2}",
            record.portions, recipe, record.price
        ));
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockRecipeRepo, MockStockRepo, mock_logger, scrambled_eggs};

    fn stock(eggs: f64) -> MockStockRepo {
        let mut stock_repo = MockStockRepo::new();
        stock_repo
            .expect_in_stock()
            .returning(move |id| Ok(if id == 1 { eggs } else { 100.0 }));
        stock_repo.expect_average_price().returning(|_| Ok(Some(0.1)));
        stock_repo
    }

    fn params(portions: Option<i32>) -> CookRecipeParams {
        CookRecipeParams {
            name: "Scrambled eggs".to_string(),
            portions,
        }
    }

    #[tokio::test]
    async fn should_record_scaled_consumption_when_cookable() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_name()
            .returning(|_| Ok(scrambled_eggs()));
        recipe_repo
            .expect_record_cooking()
            .withf(|record| {
                record.recipe_name == "Scrambled eggs"
                    && record.portions == 1
                    && record.consumption.len() == 2
                    && record.consumption[0].amount == 2.0
                    && record.consumption[1].amount == 10.0
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CookRecipeUseCaseImpl {
            repository: Arc::new(recipe_repo),
            stock_repository: Arc::new(stock(6.0)),
            logger: mock_logger(),
        };

        let assessment = use_case.execute(params(Some(1))).await.unwrap();

        assert!(assessment.can_be_cooked);
        assert!((assessment.current_price - 1.2).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_change_nothing_when_short() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_name()
            .returning(|_| Ok(scrambled_eggs()));
        recipe_repo.expect_record_cooking().never();

        let use_case = CookRecipeUseCaseImpl {
            repository: Arc::new(recipe_repo),
            stock_repository: Arc::new(stock(3.0)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(None)).await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::NotEnoughIngredients
        ));
    }

    #[tokio::test]
    async fn should_report_shortage_found_by_store() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_name()
            .returning(|_| Ok(scrambled_eggs()));
        recipe_repo
            .expect_record_cooking()
            .returning(|_| Err(RepositoryError::InsufficientStock));

        let use_case = CookRecipeUseCaseImpl {
            repository: Arc::new(recipe_repo),
            stock_repository: Arc::new(stock(6.0)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(None)).await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::NotEnoughIngredients
        ));
    }

    #[tokio::test]
    async fn should_reject_invalid_portions() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_name()
            .returning(|_| Ok(scrambled_eggs()));
        recipe_repo.expect_record_cooking().never();

        let use_case = CookRecipeUseCaseImpl {
            repository: Arc::new(recipe_repo),
            stock_repository: Arc::new(MockStockRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Some(-2))).await;

        assert!(matches!(result.unwrap_err(), RecipeError::InvalidPortions));
    }
}
