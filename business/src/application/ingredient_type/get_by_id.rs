use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::model::IngredientType;
use crate::domain::ingredient_type::repository::IngredientTypeRepository;
use crate::domain::ingredient_type::use_cases::get_by_id::{
    GetIngredientTypeByIdParams, GetIngredientTypeByIdUseCase,
};
use crate::domain::logger::Logger;

pub struct GetIngredientTypeByIdUseCaseImpl {
    pub repository: Arc<dyn IngredientTypeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetIngredientTypeByIdUseCase for GetIngredientTypeByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetIngredientTypeByIdParams,
    ) -> Result<IngredientType, IngredientTypeError> {
        self.logger
            .debug(&format!("Fetching ingredient type by id: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(IngredientTypeError::on_lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockIngredientTypeRepo, mock_logger};

    #[tokio::test]
    async fn should_return_type_when_exists() {
        let mut mock_repo = MockIngredientTypeRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| *id == 42)
            .returning(|id| Ok(IngredientType::from_repository(id, "Dairy".to_string())));

        let use_case = GetIngredientTypeByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let loaded = use_case
            .execute(GetIngredientTypeByIdParams { id: 42 })
            .await
            .unwrap();

        assert_eq!(loaded.name, "Dairy");
    }

    #[tokio::test]
    async fn should_return_does_not_exist_when_missing() {
        let mut mock_repo = MockIngredientTypeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetIngredientTypeByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetIngredientTypeByIdParams { id: 7 }).await;

        assert!(matches!(
            result.unwrap_err(),
            IngredientTypeError::DoesNotExist
        ));
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut mock_repo = MockIngredientTypeRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetIngredientTypeByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetIngredientTypeByIdParams { id: 7 }).await;

        assert!(matches!(
            result.unwrap_err(),
            IngredientTypeError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
