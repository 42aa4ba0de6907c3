use async_trait::async_trait;

use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::model::RecipeCategory;

pub struct CreateRecipeCategoryParams {
    pub name: String,
}

#[async_trait]
pub trait CreateRecipeCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateRecipeCategoryParams,
    ) -> Result<RecipeCategory, RecipeCategoryError>;
}
