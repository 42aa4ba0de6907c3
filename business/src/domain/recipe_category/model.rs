use serde::{Deserialize, Serialize};

use super::errors::RecipeCategoryError;
use crate::domain::shared::value_objects::non_blank;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeCategory {
    pub id: i32,
    pub name: String,
}

impl RecipeCategory {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i32, name: String) -> Self {
        Self { id, name }
    }
}

impl std::fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Recipe Category {}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipeCategory {
    pub name: String,
}

impl NewRecipeCategory {
    pub fn new(name: &str) -> Result<Self, RecipeCategoryError> {
        let name = non_blank(name).ok_or(RecipeCategoryError::MissingParameter("name"))?;
        Ok(Self { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_category_when_name_valid() {
        let category = NewRecipeCategory::new("Breakfast").unwrap();
        assert_eq!(category.name, "Breakfast");
    }

    #[test]
    fn should_reject_empty_name() {
        assert!(matches!(
            NewRecipeCategory::new("").unwrap_err(),
            RecipeCategoryError::MissingParameter("name")
        ));
    }
}
