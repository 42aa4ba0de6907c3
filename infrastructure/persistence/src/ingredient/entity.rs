use sqlx::FromRow;

use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient_type::model::IngredientType;

/// Columns selected for every ingredient read, type joined in.
pub const INGREDIENT_COLUMNS: &str = "i.id, i.name, i.unit, i.suggestion_threshold, i.rebuy_threshold, i.durability, t.id AS type_id, t.name AS type_name";

#[derive(Debug, FromRow)]
pub struct IngredientEntity {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub suggestion_threshold: f64,
    pub rebuy_threshold: f64,
    pub durability: Option<i32>,
    pub type_id: i32,
    pub type_name: String,
}

impl IngredientEntity {
    pub fn into_domain(self) -> Ingredient {
        Ingredient::from_repository(
            self.id,
            self.name,
            self.unit,
            IngredientType::from_repository(self.type_id, self.type_name),
            self.suggestion_threshold,
            self.rebuy_threshold,
            self.durability,
        )
    }
}
