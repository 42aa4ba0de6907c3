use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::categories::{RecipeCategoriesUseCase, RecipeCategoryParams};
use crate::domain::recipe_category::repository::RecipeCategoryRepository;

pub struct RecipeCategoriesUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub category_repository: Arc<dyn RecipeCategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

impl RecipeCategoriesUseCaseImpl {
    async fn load(&self, name: &str) -> Result<Recipe, RecipeError> {
        self.repository
            .get_by_name(name.trim())
            .await
            .map_err(RecipeError::on_lookup)
    }
}

#[async_trait]
impl RecipeCategoriesUseCase for RecipeCategoriesUseCaseImpl {
    async fn add(&self, params: RecipeCategoryParams) -> Result<Recipe, RecipeError> {
        let recipe = self.load(&params.name).await?;
        let category = self
            .category_repository
            .get_by_id(params.category_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::CategoryDoesNotExist,
                other => RecipeError::Repository(other),
            })?;

        if recipe.has_category(category.id) {
            return Err(RecipeError::AlreadyExists);
        }

        self.repository
            .add_category(&recipe.name, category.id)
            .await
            .map_err(RecipeError::on_lookup)?;
        self.logger
            .info(&format!("Added {} to {}", recipe, category));

        self.load(&recipe.name).await
    }

    async fn remove(&self, params: RecipeCategoryParams) -> Result<Recipe, RecipeError> {
        let recipe = self.load(&params.name).await?;

        self.repository
            .remove_category(&recipe.name, params.category_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotInRecipe,
                other => RecipeError::Repository(other),
            })?;
        self.logger.info(&format!(
            "Removed {} from category {}",
            recipe, params.category_id
        ));

        self.load(&recipe.name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe_category::model::RecipeCategory;
    use crate::test_support::{MockRecipeCategoryRepo, MockRecipeRepo, mock_logger, scrambled_eggs};

    fn params(category_id: i32) -> RecipeCategoryParams {
        RecipeCategoryParams {
            name: "Scrambled eggs".to_string(),
            category_id,
        }
    }

    #[tokio::test]
    async fn should_attach_category_to_recipe() {
        let mut recipe_repo = MockRecipeRepo::new();
        let mut loads = 0;
        recipe_repo.expect_get_by_name().times(2).returning(move |_| {
            loads += 1;
            let mut recipe = scrambled_eggs();
            if loads > 1 {
                recipe.categories = vec![RecipeCategory::from_repository(4, "Breakfast".to_string())];
            }
            Ok(recipe)
        });
        recipe_repo
            .expect_add_category()
            .withf(|name, id| name == "Scrambled eggs" && *id == 4)
            .times(1)
            .returning(|_, _| Ok(()));
        let mut category_repo = MockRecipeCategoryRepo::new();
        category_repo
            .expect_get_by_id()
            .returning(|id| Ok(RecipeCategory::from_repository(id, "Breakfast".to_string())));

        let use_case = RecipeCategoriesUseCaseImpl {
            repository: Arc::new(recipe_repo),
            category_repository: Arc::new(category_repo),
            logger: mock_logger(),
        };

        let recipe = use_case.add(params(4)).await.unwrap();

        assert!(recipe.has_category(4));
    }

    #[tokio::test]
    async fn should_fail_for_unknown_category() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_name()
            .returning(|_| Ok(scrambled_eggs()));
        recipe_repo.expect_add_category().never();
        let mut category_repo = MockRecipeCategoryRepo::new();
        category_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = RecipeCategoriesUseCaseImpl {
            repository: Arc::new(recipe_repo),
            category_repository: Arc::new(category_repo),
            logger: mock_logger(),
        };

        let result = use_case.add(params(4)).await;

        assert!(matches!(
            result.unwrap_err(),
            RecipeError::CategoryDoesNotExist
        ));
    }

    #[tokio::test]
    async fn should_fail_to_remove_category_not_attached() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_name()
            .returning(|_| Ok(scrambled_eggs()));
        recipe_repo
            .expect_remove_category()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = RecipeCategoriesUseCaseImpl {
            repository: Arc::new(recipe_repo),
            category_repository: Arc::new(MockRecipeCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.remove(params(4)).await;

        assert!(matches!(result.unwrap_err(), RecipeError::NotInRecipe));
    }
}
