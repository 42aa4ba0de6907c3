use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    IngredientTypes,
    Ingredients,
    RecipeCategories,
    Recipes,
}
