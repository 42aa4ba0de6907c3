use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::repository::RecipeCategoryRepository;
use crate::domain::recipe_category::use_cases::items::{
    GetRecipeCategoryItemsParams, GetRecipeCategoryItemsUseCase,
};

pub struct GetRecipeCategoryItemsUseCaseImpl {
    pub repository: Arc<dyn RecipeCategoryRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeCategoryItemsUseCase for GetRecipeCategoryItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetRecipeCategoryItemsParams,
    ) -> Result<Vec<Recipe>, RecipeCategoryError> {
        let category = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(RecipeCategoryError::on_lookup)?;

        self.logger
            .debug(&format!("Getting all recipes of {}", category));
        Ok(self.recipe_repository.get_by_category(category.id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::recipe_category::model::RecipeCategory;
    use crate::test_support::{MockRecipeCategoryRepo, MockRecipeRepo, mock_logger, scrambled_eggs};

    #[tokio::test]
    async fn should_list_recipes_of_category() {
        let mut category_repo = MockRecipeCategoryRepo::new();
        category_repo
            .expect_get_by_id()
            .returning(|id| Ok(RecipeCategory::from_repository(id, "Breakfast".to_string())));
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_category()
            .withf(|id| *id == 1)
            .returning(|_| Ok(vec![scrambled_eggs()]));

        let use_case = GetRecipeCategoryItemsUseCaseImpl {
            repository: Arc::new(category_repo),
            recipe_repository: Arc::new(recipe_repo),
            logger: mock_logger(),
        };

        let recipes = use_case
            .execute(GetRecipeCategoryItemsParams { id: 1 })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Scrambled eggs");
    }

    #[tokio::test]
    async fn should_fail_when_category_missing() {
        let mut category_repo = MockRecipeCategoryRepo::new();
        category_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo.expect_get_by_category().never();

        let use_case = GetRecipeCategoryItemsUseCaseImpl {
            repository: Arc::new(category_repo),
            recipe_repository: Arc::new(recipe_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetRecipeCategoryItemsParams { id: 1 })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeCategoryError::DoesNotExist
        ));
    }
}
