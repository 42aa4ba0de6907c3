use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::listing::NameQuery;

use super::model::{IngredientType, NewIngredientType};

#[async_trait]
pub trait IngredientTypeRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<IngredientType, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<IngredientType>, RepositoryError>;
    /// Inserts the type unless one with the same name exists (`Duplicated`).
    async fn create(&self, new_type: &NewIngredientType)
    -> Result<IngredientType, RepositoryError>;
    async fn rename(&self, id: i32, name: &str) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
    /// One page of types matching the filter, ordered by name ascending.
    async fn list(&self, query: &NameQuery) -> Result<Vec<IngredientType>, RepositoryError>;
}
