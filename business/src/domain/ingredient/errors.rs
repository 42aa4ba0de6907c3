use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum IngredientError {
    #[error("ingredient.already_exists")]
    AlreadyExists,
    #[error("ingredient.does_not_exist")]
    DoesNotExist,
    #[error("ingredient.type_does_not_exist")]
    TypeDoesNotExist,
    #[error("ingredient.missing_parameter.{0}")]
    MissingParameter(&'static str),
    #[error("ingredient.invalid_amount")]
    InvalidAmount,
    #[error("ingredient.not_enough_stock")]
    NotEnoughStock,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl IngredientError {
    /// Maps a repository failure where a missing row means the ingredient is unknown.
    pub fn on_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => IngredientError::DoesNotExist,
            RepositoryError::Duplicated => IngredientError::AlreadyExists,
            RepositoryError::InsufficientStock => IngredientError::NotEnoughStock,
            other => IngredientError::Repository(other),
        }
    }
}
