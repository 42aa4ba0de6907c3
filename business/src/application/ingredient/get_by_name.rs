use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::get_by_name::{
    GetIngredientByNameParams, GetIngredientByNameUseCase,
};
use crate::domain::logger::Logger;

pub struct GetIngredientByNameUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetIngredientByNameUseCase for GetIngredientByNameUseCaseImpl {
    async fn execute(
        &self,
        params: GetIngredientByNameParams,
    ) -> Result<Ingredient, IngredientError> {
        match self.repository.find_by_name(params.name.trim()).await? {
            Some(ingredient) => Ok(ingredient),
            None => {
                self.logger
                    .debug(&format!("{} was not found in the database", params.name));
                Err(IngredientError::DoesNotExist)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockIngredientRepo, ingredient, mock_logger};

    #[tokio::test]
    async fn should_load_by_name() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_find_by_name()
            .withf(|name| name == "Egg")
            .returning(|_| Ok(Some(ingredient(1, "Egg"))));

        let use_case = GetIngredientByNameUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let loaded = use_case
            .execute(GetIngredientByNameParams {
                name: "Egg".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(loaded.id, 1);
    }

    #[tokio::test]
    async fn should_fail_when_name_unknown() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));

        let use_case = GetIngredientByNameUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetIngredientByNameParams {
                name: "Saffron".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), IngredientError::DoesNotExist));
    }
}
