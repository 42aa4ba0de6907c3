use sqlx::FromRow;

use business::domain::recipe::model::{Recipe, RecipeIngredient};
use business::domain::recipe_category::model::RecipeCategory;

use crate::ingredient::entity::IngredientEntity;

#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    pub name: String,
    pub directions: String,
    pub picture: Option<String>,
    pub prepare_time: Option<i32>,
    pub portions: i32,
}

impl RecipeEntity {
    pub fn into_domain(
        self,
        ingredients: Vec<RecipeIngredient>,
        categories: Vec<RecipeCategory>,
    ) -> Recipe {
        Recipe::from_repository(
            self.name,
            self.directions,
            self.picture,
            self.prepare_time,
            self.portions,
            ingredients,
            categories,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct RecipeIngredientEntity {
    pub amount: f64,
    #[sqlx(flatten)]
    pub ingredient: IngredientEntity,
}

impl RecipeIngredientEntity {
    pub fn into_domain(self) -> RecipeIngredient {
        RecipeIngredient {
            ingredient: self.ingredient.into_domain(),
            amount: self.amount,
        }
    }
}
