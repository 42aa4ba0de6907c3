use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::repository::RecipeCategoryRepository;
use crate::domain::recipe_category::use_cases::delete::{
    DeleteRecipeCategoryParams, DeleteRecipeCategoryUseCase,
};

pub struct DeleteRecipeCategoryUseCaseImpl {
    pub repository: Arc<dyn RecipeCategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRecipeCategoryUseCase for DeleteRecipeCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteRecipeCategoryParams) -> Result<(), RecipeCategoryError> {
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(RecipeCategoryError::on_lookup)?;

        self.logger.info(&format!("Deleting {}", existing));
        self.repository
            .delete(existing.id)
            .await
            .map_err(RecipeCategoryError::on_lookup)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::recipe_category::model::RecipeCategory;
    use crate::test_support::{MockRecipeCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_delete_existing_category() {
        let mut mock_repo = MockRecipeCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(RecipeCategory::from_repository(id, "Dinner".to_string())));
        mock_repo
            .expect_delete()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteRecipeCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(
            use_case
                .execute(DeleteRecipeCategoryParams { id: 2 })
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn should_fail_for_missing_category() {
        let mut mock_repo = MockRecipeCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteRecipeCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteRecipeCategoryParams { id: 2 }).await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeCategoryError::DoesNotExist
        ));
    }
}
