use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{NewRecipe, NewRecipeProps, Recipe};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};

pub struct CreateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecipeUseCase for CreateRecipeUseCaseImpl {
    async fn execute(&self, params: CreateRecipeParams) -> Result<Recipe, RecipeError> {
        let new_recipe = NewRecipe::new(NewRecipeProps {
            name: params.name,
            directions: params.directions,
            picture: params.picture,
            prepare_time: params.prepare_time,
            portions: params.portions,
        })?;

        let created = self
            .repository
            .create(&new_recipe)
            .await
            .map_err(RecipeError::on_lookup)?;

        self.logger.info(&format!(
            "Created {} for {} portions",
            created, created.portions
        ));
        Ok(created)
    }
}
