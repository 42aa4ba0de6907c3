use async_trait::async_trait;

use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::model::RecipeCategory;
use crate::domain::shared::listing::{Listing, NameQuery};

#[async_trait]
pub trait ListRecipeCategoriesUseCase: Send + Sync {
    async fn execute(
        &self,
        query: NameQuery,
    ) -> Result<Listing<RecipeCategory>, RecipeCategoryError>;
}
