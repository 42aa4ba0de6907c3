use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum IngredientTypeError {
    #[error("ingredient_type.already_exists")]
    AlreadyExists,
    #[error("ingredient_type.does_not_exist")]
    DoesNotExist,
    #[error("ingredient_type.missing_parameter.{0}")]
    MissingParameter(&'static str),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl IngredientTypeError {
    /// Maps a repository failure where a missing row means the type is unknown.
    pub fn on_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => IngredientTypeError::DoesNotExist,
            RepositoryError::Duplicated => IngredientTypeError::AlreadyExists,
            other => IngredientTypeError::Repository(other),
        }
    }
}
