use sqlx::FromRow;

use business::domain::ingredient_type::model::IngredientType;

#[derive(Debug, FromRow)]
pub struct IngredientTypeEntity {
    pub id: i32,
    pub name: String,
}

impl IngredientTypeEntity {
    pub fn into_domain(self) -> IngredientType {
        IngredientType::from_repository(self.id, self.name)
    }
}
