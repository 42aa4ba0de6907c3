use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::ingredients::{
    AddRecipeIngredientParams, RecipeIngredientsUseCase, RemoveRecipeIngredientParams,
};

pub struct RecipeIngredientsUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

impl RecipeIngredientsUseCaseImpl {
    async fn load(&self, name: &str) -> Result<Recipe, RecipeError> {
        self.repository
            .get_by_name(name.trim())
            .await
            .map_err(RecipeError::on_lookup)
    }
}

#[async_trait]
impl RecipeIngredientsUseCase for RecipeIngredientsUseCaseImpl {
    async fn add(&self, params: AddRecipeIngredientParams) -> Result<Recipe, RecipeError> {
        if !(params.amount.is_finite() && params.amount > 0.0) {
            return Err(RecipeError::InvalidAmount);
        }

        let recipe = self.load(&params.name).await?;
        let ingredient = self
            .ingredient_repository
            .get_by_id(params.ingredient_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::IngredientDoesNotExist,
                other => RecipeError::Repository(other),
            })?;

        if recipe.contains_ingredient(ingredient.id) {
            return Err(RecipeError::AlreadyExists);
        }

        self.repository
            .add_ingredient(&recipe.name, ingredient.id, params.amount)
            .await
            .map_err(RecipeError::on_lookup)?;
        self.logger.info(&format!(
            "Added {} {} of {} to {}",
            params.amount, ingredient.unit, ingredient, recipe
        ));

        self.load(&recipe.name).await
    }

    async fn remove(&self, params: RemoveRecipeIngredientParams) -> Result<Recipe, RecipeError> {
        let recipe = self.load(&params.name).await?;

        self.repository
            .remove_ingredient(&recipe.name, params.ingredient_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotInRecipe,
                other => RecipeError::Repository(other),
            })?;
        self.logger.info(&format!(
            "Removed ingredient {} from {}",
            params.ingredient_id, recipe
        ));

        self.load(&recipe.name).await
    }
}
