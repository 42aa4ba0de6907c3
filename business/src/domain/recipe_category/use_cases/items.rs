use async_trait::async_trait;

use crate::domain::recipe::model::Recipe;
use crate::domain::recipe_category::errors::RecipeCategoryError;

pub struct GetRecipeCategoryItemsParams {
    pub id: i32,
}

/// Lists every recipe tagged with a category.
#[async_trait]
pub trait GetRecipeCategoryItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetRecipeCategoryItemsParams,
    ) -> Result<Vec<Recipe>, RecipeCategoryError>;
}
