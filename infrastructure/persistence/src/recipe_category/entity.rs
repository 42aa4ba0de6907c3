use sqlx::FromRow;

use business::domain::recipe_category::model::RecipeCategory;

#[derive(Debug, FromRow)]
pub struct RecipeCategoryEntity {
    pub id: i32,
    pub name: String,
}

impl RecipeCategoryEntity {
    pub fn into_domain(self) -> RecipeCategory {
        RecipeCategory::from_repository(self.id, self.name)
    }
}
