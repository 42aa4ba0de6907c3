use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get::{GetRecipeParams, GetRecipeUseCase};

pub struct GetRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeUseCase for GetRecipeUseCaseImpl {
    async fn execute(&self, params: GetRecipeParams) -> Result<Recipe, RecipeError> {
        self.logger
            .debug(&format!("Fetching recipe: {}", params.name));

        let recipe = self
            .repository
            .get_by_name(params.name.trim())
            .await
            .map_err(RecipeError::on_lookup)?;
        recipe.scaled_to(params.portions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockRecipeRepo, mock_logger, scrambled_eggs};

    fn use_case_with_eggs() -> GetRecipeUseCaseImpl {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_name()
            .withf(|name| name == "Scrambled eggs")
            .returning(|_| Ok(scrambled_eggs()));
        GetRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_stored_portions_by_default() {
        let recipe = use_case_with_eggs()
            .execute(GetRecipeParams {
                name: "Scrambled eggs".to_string(),
                portions: None,
            })
            .await
            .unwrap();

        assert_eq!(recipe, scrambled_eggs());
    }

    #[tokio::test]
    async fn should_scale_amounts_to_requested_portions() {
        let recipe = use_case_with_eggs()
            .execute(GetRecipeParams {
                name: "Scrambled eggs".to_string(),
                portions: Some(3),
            })
            .await
            .unwrap();

        assert_eq!(recipe.portions, 3);
        assert_eq!(recipe.ingredients[0].amount, 6.0);
        assert_eq!(recipe.ingredients[1].amount, 30.0);
    }

    #[tokio::test]
    async fn should_fail_for_unknown_recipe() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo
            .expect_get_by_name()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetRecipeParams {
                name: "Soup".to_string(),
                portions: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::DoesNotExist));
    }
}
