use poem_openapi::Object;

use business::domain::recipe_category::model::RecipeCategory;
use business::domain::shared::listing::Listing;

#[derive(Debug, Clone, PartialEq, Object)]
pub struct RecipeCategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<RecipeCategory> for RecipeCategoryResponse {
    fn from(category: RecipeCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeCategoryListingResponse {
    /// Number of categories regardless of the filter
    pub total: i64,
    pub items: Vec<RecipeCategoryResponse>,
}

impl From<Listing<RecipeCategory>> for RecipeCategoryListingResponse {
    fn from(listing: Listing<RecipeCategory>) -> Self {
        Self {
            total: listing.total,
            items: listing.items.into_iter().map(Into::into).collect(),
        }
    }
}
