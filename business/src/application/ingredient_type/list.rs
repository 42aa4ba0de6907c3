use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::model::IngredientType;
use crate::domain::ingredient_type::repository::IngredientTypeRepository;
use crate::domain::ingredient_type::use_cases::list::ListIngredientTypesUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::listing::{Listing, NameQuery};

pub struct ListIngredientTypesUseCaseImpl {
    pub repository: Arc<dyn IngredientTypeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListIngredientTypesUseCase for ListIngredientTypesUseCaseImpl {
    async fn execute(
        &self,
        query: NameQuery,
    ) -> Result<Listing<IngredientType>, IngredientTypeError> {
        let total = self.repository.count().await?;
        let items = self.repository.list(&query).await?;

        self.logger.debug(&format!(
            "Listed {} of {} ingredient types (filter '{}')",
            items.len(),
            total,
            query.name.as_str()
        ));
        Ok(Listing { total, items })
    }
}
