use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::model::RecipeCategory;
use crate::domain::recipe_category::repository::RecipeCategoryRepository;
use crate::domain::recipe_category::use_cases::get_by_id::{
    GetRecipeCategoryByIdParams, GetRecipeCategoryByIdUseCase,
};

pub struct GetRecipeCategoryByIdUseCaseImpl {
    pub repository: Arc<dyn RecipeCategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeCategoryByIdUseCase for GetRecipeCategoryByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetRecipeCategoryByIdParams,
    ) -> Result<RecipeCategory, RecipeCategoryError> {
        self.logger
            .debug(&format!("Fetching recipe category by id: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(RecipeCategoryError::on_lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockRecipeCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_return_does_not_exist_when_missing() {
        let mut mock_repo = MockRecipeCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetRecipeCategoryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetRecipeCategoryByIdParams { id: 9 }).await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeCategoryError::DoesNotExist
        ));
    }
}
