use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe_category::errors::RecipeCategoryError;
use crate::domain::recipe_category::model::RecipeCategory;
use crate::domain::recipe_category::repository::RecipeCategoryRepository;
use crate::domain::recipe_category::use_cases::list::ListRecipeCategoriesUseCase;
use crate::domain::shared::listing::{Listing, NameQuery};

pub struct ListRecipeCategoriesUseCaseImpl {
    pub repository: Arc<dyn RecipeCategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListRecipeCategoriesUseCase for ListRecipeCategoriesUseCaseImpl {
    async fn execute(
        &self,
        query: NameQuery,
    ) -> Result<Listing<RecipeCategory>, RecipeCategoryError> {
        let total = self.repository.count().await?;
        let items = self.repository.list(&query).await?;

        self.logger.debug(&format!(
            "Listed {} of {} recipe categories",
            items.len(),
            total
        ));
        Ok(Listing { total, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockRecipeCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_return_empty_page_when_nothing_matches() {
        let mut mock_repo = MockRecipeCategoryRepo::new();
        mock_repo.expect_count().returning(|| Ok(4));
        mock_repo.expect_list().returning(|_| Ok(vec![]));

        let use_case = ListRecipeCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let listing = use_case.execute(NameQuery::default()).await.unwrap();

        assert_eq!(listing.total, 4);
        assert!(listing.items.is_empty());
    }
}
