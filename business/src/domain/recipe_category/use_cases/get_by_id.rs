use async_trait::async_trait;

use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::model::RecipeCategory;

pub struct GetRecipeCategoryByIdParams {
    pub id: i32,
}

#[async_trait]
pub trait GetRecipeCategoryByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetRecipeCategoryByIdParams,
    ) -> Result<RecipeCategory, RecipeCategoryError>;
}
