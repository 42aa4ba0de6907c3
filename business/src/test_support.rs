//! Mocks and fixtures shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::model::{Ingredient, IngredientUpdate, NewIngredient};
use crate::domain::ingredient::repository::{IngredientQuery, IngredientRepository, StockRepository};
use crate::domain::ingredient::stock::NewStockEntry;
use crate::domain::ingredient_type::model::{IngredientType, NewIngredientType};
use crate::domain::ingredient_type::repository::IngredientTypeRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::model::{CookingRecord, NewRecipe, Recipe, RecipeIngredient};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe_category::model::{NewRecipeCategory, RecipeCategory};
use crate::domain::recipe_category::repository::RecipeCategoryRepository;
use crate::domain::shared::listing::NameQuery;

mock! {
    pub IngredientTypeRepo {}

    #[async_trait]
    impl IngredientTypeRepository for IngredientTypeRepo {
        async fn get_by_id(&self, id: i32) -> Result<IngredientType, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<IngredientType>, RepositoryError>;
        async fn create(&self, new_type: &NewIngredientType) -> Result<IngredientType, RepositoryError>;
        async fn rename(&self, id: i32, name: &str) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
        async fn count(&self) -> Result<i64, RepositoryError>;
        async fn list(&self, query: &NameQuery) -> Result<Vec<IngredientType>, RepositoryError>;
    }
}

mock! {
    pub IngredientRepo {}

    #[async_trait]
    impl IngredientRepository for IngredientRepo {
        async fn get_by_id(&self, id: i32) -> Result<Ingredient, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, RepositoryError>;
        async fn create(&self, new_ingredient: &NewIngredient) -> Result<Ingredient, RepositoryError>;
        async fn update(&self, id: i32, updates: &[IngredientUpdate]) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
        async fn count(&self) -> Result<i64, RepositoryError>;
        async fn list(&self, query: &IngredientQuery) -> Result<Vec<Ingredient>, RepositoryError>;
        async fn get_by_type(&self, ingredient_type_id: i32) -> Result<Vec<Ingredient>, RepositoryError>;
    }
}

mock! {
    pub StockRepo {}

    #[async_trait]
    impl StockRepository for StockRepo {
        async fn average_price(&self, ingredient_id: i32) -> Result<Option<f64>, RepositoryError>;
        async fn in_stock(&self, ingredient_id: i32) -> Result<f64, RepositoryError>;
        async fn stock_entries(&self, ingredient_id: i32) -> Result<i64, RepositoryError>;
        async fn add(&self, entry: &NewStockEntry) -> Result<(), RepositoryError>;
        async fn remove(&self, ingredient_id: i32, amount: f64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub RecipeCategoryRepo {}

    #[async_trait]
    impl RecipeCategoryRepository for RecipeCategoryRepo {
        async fn get_by_id(&self, id: i32) -> Result<RecipeCategory, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<RecipeCategory>, RepositoryError>;
        async fn create(&self, new_category: &NewRecipeCategory) -> Result<RecipeCategory, RepositoryError>;
        async fn rename(&self, id: i32, name: &str) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
        async fn count(&self) -> Result<i64, RepositoryError>;
        async fn list(&self, query: &NameQuery) -> Result<Vec<RecipeCategory>, RepositoryError>;
    }
}

mock! {
    pub RecipeRepo {}

    #[async_trait]
    impl RecipeRepository for RecipeRepo {
        async fn get_by_name(&self, name: &str) -> Result<Recipe, RepositoryError>;
        async fn exists(&self, name: &str) -> Result<bool, RepositoryError>;
        async fn create(&self, new_recipe: &NewRecipe) -> Result<Recipe, RepositoryError>;
        async fn delete(&self, name: &str) -> Result<(), RepositoryError>;
        async fn add_ingredient(&self, name: &str, ingredient_id: i32, amount: f64) -> Result<(), RepositoryError>;
        async fn remove_ingredient(&self, name: &str, ingredient_id: i32) -> Result<(), RepositoryError>;
        async fn add_category(&self, name: &str, category_id: i32) -> Result<(), RepositoryError>;
        async fn remove_category(&self, name: &str, category_id: i32) -> Result<(), RepositoryError>;
        async fn get_by_category(&self, category_id: i32) -> Result<Vec<Recipe>, RepositoryError>;
        async fn record_cooking(&self, record: &CookingRecord) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn dairy() -> IngredientType {
    IngredientType::from_repository(1, "Dairy".to_string())
}

pub fn ingredient(id: i32, name: &str) -> Ingredient {
    Ingredient::from_repository(
        id,
        name.to_string(),
        "g".to_string(),
        dairy(),
        0.0,
        0.0,
        None,
    )
}

/// Two portions of scrambled eggs: 4 eggs (id 1) and 20 g butter (id 2).
pub fn scrambled_eggs() -> Recipe {
    Recipe::from_repository(
        "Scrambled eggs".to_string(),
        "Whisk, then stir over low heat.".to_string(),
        None,
        Some(10),
        2,
        vec![
            RecipeIngredient {
                ingredient: ingredient(1, "Egg"),
                amount: 4.0,
            },
            RecipeIngredient {
                ingredient: ingredient(2, "Butter"),
                amount: 20.0,
            },
        ],
        vec![],
    )
}
