use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::{Ingredient, IngredientUpdate};
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::update::{
    UpdateIngredientParams, UpdateIngredientUseCase,
};
use crate::domain::ingredient_type::repository::IngredientTypeRepository;
use crate::domain::logger::Logger;

pub struct UpdateIngredientUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub type_repository: Arc<dyn IngredientTypeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateIngredientUseCase for UpdateIngredientUseCaseImpl {
    async fn execute(&self, params: UpdateIngredientParams) -> Result<Ingredient, IngredientError> {
        let updates = params
            .updates
            .into_iter()
            .map(IngredientUpdate::validated)
            .collect::<Result<Vec<_>, _>>()?;

        // Verify ingredient exists
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(IngredientError::on_lookup)?;

        if updates.is_empty() {
            return Ok(existing);
        }

        for update in &updates {
            if let IngredientUpdate::Type(type_id) = update {
                self.type_repository
                    .get_by_id(*type_id)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::NotFound => IngredientError::TypeDoesNotExist,
                        other => IngredientError::Repository(other),
                    })?;
            }
            self.logger.debug(&format!(
                "Updating ingredient column {} of {}",
                update.field(),
                existing
            ));
        }

        self.repository
            .update(existing.id, &updates)
            .await
            .map_err(IngredientError::on_lookup)?;

        self.repository
            .get_by_id(existing.id)
            .await
            .map_err(IngredientError::on_lookup)
    }
}
