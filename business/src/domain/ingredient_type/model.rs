use serde::{Deserialize, Serialize};

use super::errors::IngredientTypeError;
use crate::domain::shared::value_objects::non_blank;

/// Category label used to group ingredients on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientType {
    pub id: i32,
    pub name: String,
}

impl IngredientType {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i32, name: String) -> Self {
        Self { id, name }
    }
}

impl std::fmt::Display for IngredientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ingredient type '{}'", self.name)
    }
}

/// Validated data for a type that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredientType {
    pub name: String,
}

impl NewIngredientType {
    pub fn new(name: &str) -> Result<Self, IngredientTypeError> {
        let name = non_blank(name).ok_or(IngredientTypeError::MissingParameter("name"))?;
        Ok(Self { name })
    }
}
