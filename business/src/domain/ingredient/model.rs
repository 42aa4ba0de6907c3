use serde::{Deserialize, Serialize};

use super::errors::IngredientError;
use crate::domain::ingredient_type::model::IngredientType;
use crate::domain::shared::value_objects::{non_blank, non_blank_opt};

/// An ingredient to buy and use in recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    /// Measurable unit, used in recipes and shopping lists alike.
    pub unit: String,
    #[serde(rename = "type")]
    pub ingredient_type: IngredientType,
    /// Stock level at which the shopping list suggests buying.
    pub suggestion_threshold: f64,
    /// Stock level at which the shopping list insists on buying.
    pub rebuy_threshold: f64,
    /// Days an item usually lasts after purchase.
    pub durability: Option<i32>,
}

impl Ingredient {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i32,
        name: String,
        unit: String,
        ingredient_type: IngredientType,
        suggestion_threshold: f64,
        rebuy_threshold: f64,
        durability: Option<i32>,
    ) -> Self {
        Self {
            id,
            name,
            unit,
            ingredient_type,
            suggestion_threshold,
            rebuy_threshold,
            durability,
        }
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ingredient {}", self.name)
    }
}

pub struct NewIngredientProps {
    pub name: String,
    pub unit: Option<String>,
    pub ingredient_type_id: Option<i32>,
    pub suggestion_threshold: Option<f64>,
    pub rebuy_threshold: Option<f64>,
    pub durability: Option<i32>,
}

/// Validated data for an ingredient that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIngredient {
    pub name: String,
    pub unit: String,
    pub ingredient_type_id: i32,
    pub suggestion_threshold: f64,
    pub rebuy_threshold: f64,
    pub durability: Option<i32>,
}

impl NewIngredient {
    /// Name, unit and type are required; thresholds default to zero.
    pub fn new(props: NewIngredientProps) -> Result<Self, IngredientError> {
        let name = non_blank(&props.name).ok_or(IngredientError::MissingParameter("name"))?;
        let unit =
            non_blank_opt(props.unit.as_deref()).ok_or(IngredientError::MissingParameter("unit"))?;
        let ingredient_type_id = props
            .ingredient_type_id
            .ok_or(IngredientError::MissingParameter("ingredient_type"))?;

        Ok(Self {
            name,
            unit,
            ingredient_type_id,
            suggestion_threshold: props.suggestion_threshold.unwrap_or(0.0),
            rebuy_threshold: props.rebuy_threshold.unwrap_or(0.0),
            durability: props.durability,
        })
    }
}

/// A change to one column of an ingredient.
///
/// Every variant maps to its own fixed statement in the repository.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientUpdate {
    Name(String),
    Unit(String),
    Type(i32),
    SuggestionThreshold(f64),
    RebuyThreshold(f64),
    Durability(Option<i32>),
}

impl IngredientUpdate {
    pub fn field(&self) -> &'static str {
        match self {
            IngredientUpdate::Name(_) => "name",
            IngredientUpdate::Unit(_) => "unit",
            IngredientUpdate::Type(_) => "ingredient_type",
            IngredientUpdate::SuggestionThreshold(_) => "suggestion_threshold",
            IngredientUpdate::RebuyThreshold(_) => "rebuy_threshold",
            IngredientUpdate::Durability(_) => "durability",
        }
    }

    /// Trims text values and rejects blank ones.
    pub fn validated(self) -> Result<Self, IngredientError> {
        match self {
            IngredientUpdate::Name(name) => non_blank(&name)
                .map(IngredientUpdate::Name)
                .ok_or(IngredientError::MissingParameter("name")),
            IngredientUpdate::Unit(unit) => non_blank(&unit)
                .map(IngredientUpdate::Unit)
                .ok_or(IngredientError::MissingParameter("unit")),
            other => Ok(other),
        }
    }
}
