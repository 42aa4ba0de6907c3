use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::delete::{
    DeleteIngredientParams, DeleteIngredientUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteIngredientUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteIngredientUseCase for DeleteIngredientUseCaseImpl {
    async fn execute(&self, params: DeleteIngredientParams) -> Result<(), IngredientError> {
        // Verify ingredient exists before deleting
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(IngredientError::on_lookup)?;

        self.logger.info(&format!("Deleting {}", existing));
        self.repository
            .delete(existing.id)
            .await
            .map_err(IngredientError::on_lookup)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockIngredientRepo, ingredient, mock_logger};

    #[tokio::test]
    async fn should_delete_ingredient_when_exists() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(ingredient(id, "Egg")));
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));

        let use_case = DeleteIngredientUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(DeleteIngredientParams { id: 1 }).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_does_not_exist_when_missing() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteIngredientUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteIngredientParams { id: 1 }).await;

        assert!(matches!(result.unwrap_err(), IngredientError::DoesNotExist));
    }
}
