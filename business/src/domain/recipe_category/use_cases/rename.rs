use async_trait::async_trait;

use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::model::RecipeCategory;

pub struct RenameRecipeCategoryParams {
    pub id: i32,
    pub new_name: String,
}

#[async_trait]
pub trait RenameRecipeCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RenameRecipeCategoryParams,
    ) -> Result<RecipeCategory, RecipeCategoryError>;
}
