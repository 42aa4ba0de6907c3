use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::model::{NewRecipeCategory, RecipeCategory};
use crate::domain::recipe_category::repository::RecipeCategoryRepository;
use crate::domain::recipe_category::use_cases::create::{
    CreateRecipeCategoryParams, CreateRecipeCategoryUseCase,
};

pub struct CreateRecipeCategoryUseCaseImpl {
    pub repository: Arc<dyn RecipeCategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecipeCategoryUseCase for CreateRecipeCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: CreateRecipeCategoryParams,
    ) -> Result<RecipeCategory, RecipeCategoryError> {
        let new_category = NewRecipeCategory::new(&params.name)?;
        let created = self
            .repository
            .create(&new_category)
            .await
            .map_err(RecipeCategoryError::on_lookup)?;

        self.logger
            .info(&format!("Created {}, new id: {}", created, created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockRecipeCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_create_category() {
        let mut mock_repo = MockRecipeCategoryRepo::new();
        mock_repo
            .expect_create()
            .withf(|new_category| new_category.name == "Breakfast")
            .returning(|new_category| {
                Ok(RecipeCategory::from_repository(3, new_category.name.clone()))
            });

        let use_case = CreateRecipeCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let created = use_case
            .execute(CreateRecipeCategoryParams {
                name: "Breakfast ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created, RecipeCategory::from_repository(3, "Breakfast".to_string()));
    }

    #[tokio::test]
    async fn should_fail_when_name_taken() {
        let mut mock_repo = MockRecipeCategoryRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateRecipeCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateRecipeCategoryParams {
                name: "Breakfast".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeCategoryError::AlreadyExists
        ));
    }
}
