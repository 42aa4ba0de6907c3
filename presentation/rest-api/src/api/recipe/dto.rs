use poem_openapi::Object;

use business::domain::recipe::model::{Recipe, RecipeAssessment, RecipeIngredient, Shortage};

use crate::api::ingredient::dto::IngredientResponse;
use crate::api::recipe_category::dto::RecipeCategoryResponse;

#[derive(Debug, Clone, Object)]
pub struct RecipeIngredientResponse {
    pub ingredient: IngredientResponse,
    /// Amount for the returned number of portions, in the ingredient's unit
    pub amount: f64,
}

impl From<RecipeIngredient> for RecipeIngredientResponse {
    fn from(item: RecipeIngredient) -> Self {
        Self {
            ingredient: item.ingredient.into(),
            amount: item.amount,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    /// Unique recipe name, also its identifier
    pub name: String,
    pub directions: String,
    pub picture: Option<String>,
    /// Minutes
    pub prepare_time: Option<i32>,
    pub portions: i32,
    pub ingredients: Vec<RecipeIngredientResponse>,
    pub categories: Vec<RecipeCategoryResponse>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            name: recipe.name,
            directions: recipe.directions,
            picture: recipe.picture,
            prepare_time: recipe.prepare_time,
            portions: recipe.portions,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            categories: recipe.categories.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateRecipeRequest {
    pub name: String,
    /// Defaults to an empty string
    pub directions: Option<String>,
    pub picture: Option<String>,
    pub prepare_time: Option<i32>,
    /// Required, greater than zero
    pub portions: Option<i32>,
}

#[derive(Debug, Clone, Object)]
pub struct AddRecipeIngredientRequest {
    pub ingredient_id: i32,
    /// Amount for the recipe's stored portions
    pub amount: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ShortageResponse {
    pub ingredient_id: i32,
    pub name: String,
    pub required: f64,
    pub available: f64,
}

impl From<Shortage> for ShortageResponse {
    fn from(shortage: Shortage) -> Self {
        Self {
            ingredient_id: shortage.ingredient_id,
            name: shortage.name,
            required: shortage.required,
            available: shortage.available,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeAssessmentResponse {
    pub portions: i32,
    pub can_be_cooked: bool,
    /// Sum of average price times amount over all ingredients
    pub current_price: f64,
    pub portion_price: f64,
    pub shortages: Vec<ShortageResponse>,
}

impl From<RecipeAssessment> for RecipeAssessmentResponse {
    fn from(assessment: RecipeAssessment) -> Self {
        Self {
            portions: assessment.portions,
            can_be_cooked: assessment.can_be_cooked,
            current_price: assessment.current_price,
            portion_price: assessment.portion_price,
            shortages: assessment.shortages.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::ingredient::model::Ingredient;
    use business::domain::ingredient_type::model::IngredientType;
    use business::domain::recipe_category::model::RecipeCategory;
    use poem_openapi::types::{ParseFromJSON, ToJSON};
    use serde_json::json;

    fn omelette() -> Recipe {
        Recipe::from_repository(
            "Omelette".to_string(),
            "Whisk and fry.".to_string(),
            None,
            Some(10),
            1,
            vec![RecipeIngredient {
                ingredient: Ingredient::from_repository(
                    3,
                    "Egg".to_string(),
                    "pcs".to_string(),
                    IngredientType::from_repository(1, "Dairy".to_string()),
                    0.0,
                    6.0,
                    Some(21),
                ),
                amount: 3.0,
            }],
            vec![RecipeCategory::from_repository(2, "Breakfast".to_string())],
        )
    }

    #[test]
    fn should_nest_ingredients_and_categories() {
        let value = RecipeResponse::from(omelette()).to_json().unwrap();

        assert_eq!(value["name"], json!("Omelette"));
        assert_eq!(value["ingredients"][0]["amount"], json!(3.0));
        assert_eq!(value["ingredients"][0]["ingredient"]["type"]["name"], json!("Dairy"));
        assert_eq!(value["categories"][0]["name"], json!("Breakfast"));
    }

    #[test]
    fn should_accept_recipe_without_optional_fields() {
        let request =
            CreateRecipeRequest::parse_from_json(Some(json!({"name": "Toast", "portions": 1})))
                .unwrap();

        assert_eq!(request.name, "Toast");
        assert_eq!(request.portions, Some(1));
        assert!(request.directions.is_none());
    }
}
