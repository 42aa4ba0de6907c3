use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::get_by_id::{
    GetIngredientByIdParams, GetIngredientByIdUseCase,
};
use crate::domain::logger::Logger;

pub struct GetIngredientByIdUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetIngredientByIdUseCase for GetIngredientByIdUseCaseImpl {
    async fn execute(&self, params: GetIngredientByIdParams) -> Result<Ingredient, IngredientError> {
        self.logger
            .debug(&format!("Fetching ingredient by id: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(IngredientError::on_lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockIngredientRepo, ingredient, mock_logger};

    #[tokio::test]
    async fn should_return_ingredient_when_exists() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| *id == 3)
            .returning(|id| Ok(ingredient(id, "Butter")));

        let use_case = GetIngredientByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let loaded = use_case
            .execute(GetIngredientByIdParams { id: 3 })
            .await
            .unwrap();

        assert_eq!(loaded, ingredient(3, "Butter"));
    }

    #[tokio::test]
    async fn should_return_does_not_exist_when_missing() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetIngredientByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetIngredientByIdParams { id: 3 }).await;

        assert!(matches!(result.unwrap_err(), IngredientError::DoesNotExist));
    }
}
