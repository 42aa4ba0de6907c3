use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::repository::IngredientTypeRepository;
use crate::domain::ingredient_type::use_cases::items::{
    GetIngredientTypeItemsParams, GetIngredientTypeItemsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetIngredientTypeItemsUseCaseImpl {
    pub repository: Arc<dyn IngredientTypeRepository>,
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetIngredientTypeItemsUseCase for GetIngredientTypeItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetIngredientTypeItemsParams,
    ) -> Result<Vec<Ingredient>, IngredientTypeError> {
        let ingredient_type = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(IngredientTypeError::on_lookup)?;

        self.logger
            .debug(&format!("Getting all ingredients of {}", ingredient_type));
        let items = self
            .ingredient_repository
            .get_by_type(ingredient_type.id)
            .await?;
        Ok(items)
    }
}
