use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};

pub struct DeleteRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRecipeUseCase for DeleteRecipeUseCaseImpl {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError> {
        let name = params.name.trim();
        if !self.repository.exists(name).await? {
            return Err(RecipeError::DoesNotExist);
        }

        self.logger.info(&format!("Deleting recipe {}", name));
        self.repository
            .delete(name)
            .await
            .map_err(RecipeError::on_lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockRecipeRepo, mock_logger};

    #[tokio::test]
    async fn should_delete_existing_recipe() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo.expect_exists().returning(|_| Ok(true));
        mock_repo
            .expect_delete()
            .withf(|name| name == "Omelette")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                name: "Omelette".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_for_unknown_recipe() {
        let mut mock_repo = MockRecipeRepo::new();
        mock_repo.expect_exists().returning(|_| Ok(false));
        mock_repo.expect_delete().never();

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                name: "Omelette".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::DoesNotExist));
    }
}
