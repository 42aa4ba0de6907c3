use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient_type::errors::IngredientTypeError;
use crate::domain::ingredient_type::repository::IngredientTypeRepository;
use crate::domain::ingredient_type::use_cases::delete::{
    DeleteIngredientTypeParams, DeleteIngredientTypeUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteIngredientTypeUseCaseImpl {
    pub repository: Arc<dyn IngredientTypeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteIngredientTypeUseCase for DeleteIngredientTypeUseCaseImpl {
    async fn execute(&self, params: DeleteIngredientTypeParams) -> Result<(), IngredientTypeError> {
        // Verify the type exists before deleting
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(IngredientTypeError::on_lookup)?;

        self.logger.info(&format!("Deleting {}", existing));
        self.repository
            .delete(existing.id)
            .await
            .map_err(IngredientTypeError::on_lookup)?;

        Ok(())
    }
}
