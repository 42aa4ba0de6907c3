use std::collections::HashMap;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::repository::StockRepository;
use crate::domain::recipe::model::{IngredientLevel, Recipe};

/// Reads stock and price of every ingredient the recipe uses.
pub(crate) async fn ingredient_levels(
    stock_repository: &dyn StockRepository,
    recipe: &Recipe,
) -> Result<HashMap<i32, IngredientLevel>, RepositoryError> {
    let mut levels = HashMap::with_capacity(recipe.ingredients.len());
    for item in &recipe.ingredients {
        let id = item.ingredient.id;
        if levels.contains_key(&id) {
            continue;
        }
        let level = IngredientLevel {
            in_stock: stock_repository.in_stock(id).await?,
            average_price: stock_repository.average_price(id).await?,
        };
        levels.insert(id, level);
    }
    Ok(levels)
}
