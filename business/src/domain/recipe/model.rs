use std::collections::HashMap;

use serde::Serialize;

use super::errors::RecipeError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::recipe_category::model::RecipeCategory;
use crate::domain::shared::value_objects::non_blank;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeIngredient {
    pub ingredient: Ingredient,
    pub amount: f64,
}

/// A recipe, identified by its name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub name: String,
    pub directions: String,
    pub picture: Option<String>,
    /// Minutes.
    pub prepare_time: Option<i32>,
    pub portions: i32,
    pub ingredients: Vec<RecipeIngredient>,
    pub categories: Vec<RecipeCategory>,
}

/// Current stock and price of one ingredient, as needed to cost a recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientLevel {
    pub in_stock: f64,
    pub average_price: Option<f64>,
}

/// An ingredient the recipe needs more of than there is in stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shortage {
    pub ingredient_id: i32,
    pub name: String,
    pub required: f64,
    pub available: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeAssessment {
    pub portions: i32,
    pub can_be_cooked: bool,
    pub current_price: f64,
    pub portion_price: f64,
    pub shortages: Vec<Shortage>,
}

impl Recipe {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        name: String,
        directions: String,
        picture: Option<String>,
        prepare_time: Option<i32>,
        portions: i32,
        ingredients: Vec<RecipeIngredient>,
        categories: Vec<RecipeCategory>,
    ) -> Self {
        Self {
            name,
            directions,
            picture,
            prepare_time,
            portions,
            ingredients,
            categories,
        }
    }

    /// Rescales every amount to `portions`, keeping the stored ratio.
    pub fn scaled_to(mut self, portions: Option<i32>) -> Result<Self, RecipeError> {
        let Some(wanted) = portions else {
            return Ok(self);
        };
        if wanted <= 0 {
            return Err(RecipeError::InvalidPortions);
        }
        if wanted != self.portions && self.portions > 0 {
            let ratio = f64::from(wanted) / f64::from(self.portions);
            for item in &mut self.ingredients {
                item.amount *= ratio;
            }
            self.portions = wanted;
        }
        Ok(self)
    }

    pub fn contains_ingredient(&self, ingredient_id: i32) -> bool {
        self.ingredients
            .iter()
            .any(|item| item.ingredient.id == ingredient_id)
    }

    pub fn has_category(&self, category_id: i32) -> bool {
        self.categories.iter().any(|c| c.id == category_id)
    }

    /// Checks stock and prices the recipe.
    ///
    /// An ingredient absent from `levels` counts as out of stock and without
    /// price history; an ingredient without price history adds nothing.
    pub fn assess(&self, levels: &HashMap<i32, IngredientLevel>) -> RecipeAssessment {
        let mut shortages = Vec::new();
        let mut current_price = 0.0;

        for item in &self.ingredients {
            let level = levels.get(&item.ingredient.id).copied().unwrap_or(IngredientLevel {
                in_stock: 0.0,
                average_price: None,
            });
            if item.amount > level.in_stock {
                shortages.push(Shortage {
                    ingredient_id: item.ingredient.id,
                    name: item.ingredient.name.clone(),
                    required: item.amount,
                    available: level.in_stock,
                });
            }
            current_price += level.average_price.unwrap_or(0.0) * item.amount;
        }

        RecipeAssessment {
            portions: self.portions,
            can_be_cooked: shortages.is_empty(),
            current_price,
            portion_price: current_price / f64::from(self.portions.max(1)),
            shortages,
        }
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Recipe {}", self.name)
    }
}

pub struct NewRecipeProps {
    pub name: String,
    pub directions: Option<String>,
    pub picture: Option<String>,
    pub prepare_time: Option<i32>,
    pub portions: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub name: String,
    pub directions: String,
    pub picture: Option<String>,
    pub prepare_time: Option<i32>,
    pub portions: i32,
}

impl NewRecipe {
    pub fn new(props: NewRecipeProps) -> Result<Self, RecipeError> {
        let name = non_blank(&props.name).ok_or(RecipeError::MissingParameter("name"))?;
        let portions = props
            .portions
            .ok_or(RecipeError::MissingParameter("portions"))?;
        if portions <= 0 {
            return Err(RecipeError::InvalidPortions);
        }

        Ok(Self {
            name,
            directions: props.directions.unwrap_or_default(),
            picture: props.picture,
            prepare_time: props.prepare_time,
            portions,
        })
    }
}

/// Stock taken by cooking, per ingredient.
#[derive(Debug, Clone, PartialEq)]
pub struct Consumption {
    pub ingredient_id: i32,
    pub amount: f64,
}

/// Everything written when a recipe is cooked.
#[derive(Debug, Clone, PartialEq)]
pub struct CookingRecord {
    pub recipe_name: String,
    pub portions: i32,
    pub price: f64,
    pub consumption: Vec<Consumption>,
}

impl CookingRecord {
    pub fn new(recipe: &Recipe, price: f64) -> Self {
        Self {
            recipe_name: recipe.name.clone(),
            portions: recipe.portions,
            price,
            consumption: recipe
                .ingredients
                .iter()
                .map(|item| Consumption {
                    ingredient_id: item.ingredient.id,
                    amount: item.amount,
                })
                .collect(),
        }
    }
}
