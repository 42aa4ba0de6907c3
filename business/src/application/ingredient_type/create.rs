use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::model::{IngredientType, NewIngredientType};
use crate::domain::ingredient_type::repository::IngredientTypeRepository;
use crate::domain::ingredient_type::use_cases::create::{
    CreateIngredientTypeParams, CreateIngredientTypeUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateIngredientTypeUseCaseImpl {
    pub repository: Arc<dyn IngredientTypeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateIngredientTypeUseCase for CreateIngredientTypeUseCaseImpl {
    async fn execute(
        &self,
        params: CreateIngredientTypeParams,
    ) -> Result<IngredientType, IngredientTypeError> {
        self.logger
            .debug(&format!("Trying to create ingredient type: {}", params.name));

        let new_type = NewIngredientType::new(&params.name)?;
        let created = self
            .repository
            .create(&new_type)
            .await
            .map_err(IngredientTypeError::on_lookup)?;

        self.logger
            .info(&format!("Created {}, new id: {}", created, created.id));
        Ok(created)
    }
}
