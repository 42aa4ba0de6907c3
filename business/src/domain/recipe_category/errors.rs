use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum RecipeCategoryError {
    #[error("recipe_category.already_exists")]
    AlreadyExists,
    #[error("recipe_category.does_not_exist")]
    DoesNotExist,
    #[error("recipe_category.missing_parameter.{0}")]
    MissingParameter(&'static str),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl RecipeCategoryError {
    pub fn on_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => RecipeCategoryError::DoesNotExist,
            RepositoryError::Duplicated => RecipeCategoryError::AlreadyExists,
            other => RecipeCategoryError::Repository(other),
        }
    }
}
