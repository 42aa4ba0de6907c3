use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::listing::{Pagination, TextFilter};

use super::model::{Ingredient, IngredientUpdate, NewIngredient};
use super::stock::NewStockEntry;

/// Listing query for ingredients. Each filter is a case-insensitive substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientQuery {
    pub pagination: Pagination,
    pub name: TextFilter,
    pub unit: TextFilter,
    /// Matched against the name of the ingredient's type.
    pub ingredient_type: TextFilter,
}

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Ingredient, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, RepositoryError>;
    /// Inserts the ingredient unless one with the same name exists (`Duplicated`).
    async fn create(&self, new_ingredient: &NewIngredient) -> Result<Ingredient, RepositoryError>;
    /// Applies all updates in one transaction.
    async fn update(&self, id: i32, updates: &[IngredientUpdate]) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
    /// One page of ingredients matching every filter, ordered by name ascending.
    async fn list(&self, query: &IngredientQuery) -> Result<Vec<Ingredient>, RepositoryError>;
    async fn get_by_type(&self, ingredient_type_id: i32) -> Result<Vec<Ingredient>, RepositoryError>;
}

#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Mean price over the most recent purchases, `None` without purchases.
    async fn average_price(&self, ingredient_id: i32) -> Result<Option<f64>, RepositoryError>;
    async fn in_stock(&self, ingredient_id: i32) -> Result<f64, RepositoryError>;
    async fn stock_entries(&self, ingredient_id: i32) -> Result<i64, RepositoryError>;
    async fn add(&self, entry: &NewStockEntry) -> Result<(), RepositoryError>;
    /// Consumes `amount`, most recent purchase first, atomically.
    /// Fails with `InsufficientStock` and changes nothing when short.
    async fn remove(&self, ingredient_id: i32, amount: f64) -> Result<(), RepositoryError>;
}
