use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::{Ingredient, NewIngredient, NewIngredientProps};
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::create::{
    CreateIngredientParams, CreateIngredientUseCase,
};
use crate::domain::ingredient_type::repository::IngredientTypeRepository;
use crate::domain::logger::Logger;

pub struct CreateIngredientUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub type_repository: Arc<dyn IngredientTypeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateIngredientUseCase for CreateIngredientUseCaseImpl {
    async fn execute(&self, params: CreateIngredientParams) -> Result<Ingredient, IngredientError> {
        self.logger
            .debug(&format!("Trying to create ingredient: {}", params.name));

        let new_ingredient = NewIngredient::new(NewIngredientProps {
            name: params.name,
            unit: params.unit,
            ingredient_type_id: params.ingredient_type_id,
            suggestion_threshold: params.suggestion_threshold,
            rebuy_threshold: params.rebuy_threshold,
            durability: params.durability,
        })?;

        self.type_repository
            .get_by_id(new_ingredient.ingredient_type_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => IngredientError::TypeDoesNotExist,
                other => IngredientError::Repository(other),
            })?;

        let created = self
            .repository
            .create(&new_ingredient)
            .await
            .map_err(IngredientError::on_lookup)?;

        self.logger
            .info(&format!("Created {}, new id: {}", created, created.id));
        Ok(created)
    }
}
