use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.already_exists")]
    AlreadyExists,
    #[error("recipe.does_not_exist")]
    DoesNotExist,
    #[error("recipe.ingredient_does_not_exist")]
    IngredientDoesNotExist,
    #[error("recipe.category_does_not_exist")]
    CategoryDoesNotExist,
    #[error("recipe.not_in_recipe")]
    NotInRecipe,
    #[error("recipe.missing_parameter.{0}")]
    MissingParameter(&'static str),
    #[error("recipe.invalid_portions")]
    InvalidPortions,
    #[error("recipe.invalid_amount")]
    InvalidAmount,
    #[error("recipe.not_enough_ingredients")]
    NotEnoughIngredients,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl RecipeError {
    /// Maps a repository failure where a missing row means the recipe is unknown.
    pub fn on_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => RecipeError::DoesNotExist,
            RepositoryError::Duplicated => RecipeError::AlreadyExists,
            RepositoryError::InsufficientStock => RecipeError::NotEnoughIngredients,
            other => RecipeError::Repository(other),
        }
    }
}
