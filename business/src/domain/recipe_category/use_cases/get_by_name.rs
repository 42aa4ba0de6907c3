use async_trait::async_trait;

use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::model::RecipeCategory;

pub struct GetRecipeCategoryByNameParams {
    pub name: String,
}

#[async_trait]
pub trait GetRecipeCategoryByNameUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetRecipeCategoryByNameParams,
    ) -> Result<RecipeCategory, RecipeCategoryError>;
}
