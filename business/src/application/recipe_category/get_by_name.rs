use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::model::RecipeCategory;
use crate::domain::recipe_category::repository::RecipeCategoryRepository;
use crate::domain::recipe_category::use_cases::get_by_name::{
    GetRecipeCategoryByNameParams, GetRecipeCategoryByNameUseCase,
};

pub struct GetRecipeCategoryByNameUseCaseImpl {
    pub repository: Arc<dyn RecipeCategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeCategoryByNameUseCase for GetRecipeCategoryByNameUseCaseImpl {
    async fn execute(
        &self,
        params: GetRecipeCategoryByNameParams,
    ) -> Result<RecipeCategory, RecipeCategoryError> {
        self.repository
            .find_by_name(params.name.trim())
            .await?
            .ok_or_else(|| {
                self.logger
                    .debug(&format!("{} was not found in the database", params.name));
                RecipeCategoryError::DoesNotExist
            })
    }
}
