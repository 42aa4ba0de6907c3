use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::model::IngredientType;
use crate::domain::ingredient_type::repository::IngredientTypeRepository;
use crate::domain::ingredient_type::use_cases::get_by_name::{
    GetIngredientTypeByNameParams, GetIngredientTypeByNameUseCase,
};
use crate::domain::logger::Logger;

pub struct GetIngredientTypeByNameUseCaseImpl {
    pub repository: Arc<dyn IngredientTypeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetIngredientTypeByNameUseCase for GetIngredientTypeByNameUseCaseImpl {
    async fn execute(
        &self,
        params: GetIngredientTypeByNameParams,
    ) -> Result<IngredientType, IngredientTypeError> {
        let found = self.repository.find_by_name(params.name.trim()).await?;
        match found {
            Some(ingredient_type) => Ok(ingredient_type),
            None => {
                self.logger
                    .debug(&format!("{} was not found in the database", params.name));
                Err(IngredientTypeError::DoesNotExist)
            }
        }
    }
}
