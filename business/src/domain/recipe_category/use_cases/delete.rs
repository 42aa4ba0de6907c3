use async_trait::async_trait;

use crate::domain::recipe_category::errors::RecipeCategoryError;

pub struct DeleteRecipeCategoryParams {
    pub id: i32,
}

#[async_trait]
pub trait DeleteRecipeCategoryUseCase: Send + Sync {
    async fn execute(&self, params: DeleteRecipeCategoryParams) -> Result<(), RecipeCategoryError>;
}
