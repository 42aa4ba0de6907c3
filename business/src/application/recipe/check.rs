use std::sync::Arc;

use async_trait::async_trait;

use crate::application::recipe::levels::ingredient_levels;
use crate::domain::ingredient::repository::StockRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeAssessment;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::check::{CheckRecipeParams, CheckRecipeUseCase};

pub struct CheckRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub stock_repository: Arc<dyn StockRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckRecipeUseCase for CheckRecipeUseCaseImpl {
    async fn execute(&self, params: CheckRecipeParams) -> Result<RecipeAssessment, RecipeError> {
        let recipe = self
            .repository
            .get_by_name(params.name.trim())
            .await
            .map_err(RecipeError::on_lookup)?
            .scaled_to(params.portions)?;

        let levels = ingredient_levels(self.stock_repository.as_ref(), &recipe).await?;
        let assessment = recipe.assess(&levels);

        self.logger.debug(&format!(
            "{} for {} portions: cookable={}, price={:.2}",
            recipe, assessment.portions, assessment.can_be_cooked, assessment.current_price
        ));
        Ok(assessment)
    }
}
