use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::model::{NewRecipeCategory, RecipeCategory};
use crate::domain::recipe_category::repository::RecipeCategoryRepository;
use crate::domain::recipe_category::use_cases::rename::{
    RenameRecipeCategoryParams, RenameRecipeCategoryUseCase,
};

pub struct RenameRecipeCategoryUseCaseImpl {
    pub repository: Arc<dyn RecipeCategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RenameRecipeCategoryUseCase for RenameRecipeCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: RenameRecipeCategoryParams,
    ) -> Result<RecipeCategory, RecipeCategoryError> {
        let NewRecipeCategory { name } = NewRecipeCategory::new(&params.new_name)?;

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(RecipeCategoryError::on_lookup)?;

        self.logger.debug(&format!(
            "Updating name of {}, new name: {}",
            existing, name
        ));
        self.repository
            .rename(existing.id, &name)
            .await
            .map_err(RecipeCategoryError::on_lookup)?;

        Ok(RecipeCategory::from_repository(existing.id, name))
    }
}
