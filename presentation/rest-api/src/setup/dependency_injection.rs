use std::sync::Arc;

use sqlx::PgPool;

use logger::TracingLogger;
use persistence::ingredient::repository::IngredientRepositoryPostgres;
use persistence::ingredient_type::repository::IngredientTypeRepositoryPostgres;
use persistence::recipe::repository::RecipeRepositoryPostgres;
use persistence::recipe_category::repository::RecipeCategoryRepositoryPostgres;
use persistence::stock::repository::StockRepositoryPostgres;

use business::application::ingredient::add_stock::AddStockUseCaseImpl;
use business::application::ingredient::create::CreateIngredientUseCaseImpl;
use business::application::ingredient::delete::DeleteIngredientUseCaseImpl;
use business::application::ingredient::get_by_id::GetIngredientByIdUseCaseImpl;
use business::application::ingredient::get_by_name::GetIngredientByNameUseCaseImpl;
use business::application::ingredient::get_stock::GetIngredientStockUseCaseImpl;
use business::application::ingredient::list::ListIngredientsUseCaseImpl;
use business::application::ingredient::remove_stock::RemoveStockUseCaseImpl;
use business::application::ingredient::update::UpdateIngredientUseCaseImpl;
use business::application::ingredient_type::create::CreateIngredientTypeUseCaseImpl;
use business::application::ingredient_type::delete::DeleteIngredientTypeUseCaseImpl;
use business::application::ingredient_type::get_by_id::GetIngredientTypeByIdUseCaseImpl;
use business::application::ingredient_type::get_by_name::GetIngredientTypeByNameUseCaseImpl;
use business::application::ingredient_type::items::GetIngredientTypeItemsUseCaseImpl;
use business::application::ingredient_type::list::ListIngredientTypesUseCaseImpl;
use business::application::ingredient_type::rename::RenameIngredientTypeUseCaseImpl;
use business::application::recipe::categories::RecipeCategoriesUseCaseImpl;
use business::application::recipe::check::CheckRecipeUseCaseImpl;
use business::application::recipe::cook::CookRecipeUseCaseImpl;
use business::application::recipe::create::CreateRecipeUseCaseImpl;
use business::application::recipe::delete::DeleteRecipeUseCaseImpl;
use business::application::recipe::get::GetRecipeUseCaseImpl;
use business::application::recipe::ingredients::RecipeIngredientsUseCaseImpl;
use business::application::recipe_category::create::CreateRecipeCategoryUseCaseImpl;
use business::application::recipe_category::delete::DeleteRecipeCategoryUseCaseImpl;
use business::application::recipe_category::get_by_id::GetRecipeCategoryByIdUseCaseImpl;
use business::application::recipe_category::get_by_name::GetRecipeCategoryByNameUseCaseImpl;
use business::application::recipe_category::items::GetRecipeCategoryItemsUseCaseImpl;
use business::application::recipe_category::list::ListRecipeCategoriesUseCaseImpl;
use business::application::recipe_category::rename::RenameRecipeCategoryUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::ingredient::routes::IngredientApi;
use crate::api::ingredient_type::routes::IngredientTypeApi;
use crate::api::recipe::routes::RecipeApi;
use crate::api::recipe_category::routes::RecipeCategoryApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub ingredient_type_api: IngredientTypeApi,
    pub ingredient_api: IngredientApi,
    pub recipe_category_api: RecipeCategoryApi,
    pub recipe_api: RecipeApi,
}

impl DependencyContainer {
    pub fn new(pool: PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let ingredient_type_repository =
            Arc::new(IngredientTypeRepositoryPostgres::new(pool.clone()));
        let ingredient_repository = Arc::new(IngredientRepositoryPostgres::new(pool.clone()));
        let stock_repository = Arc::new(StockRepositoryPostgres::new(pool.clone()));
        let recipe_category_repository =
            Arc::new(RecipeCategoryRepositoryPostgres::new(pool.clone()));
        let recipe_repository = Arc::new(RecipeRepositoryPostgres::new(pool));

        // Ingredient type use cases
        let ingredient_type_api = IngredientTypeApi::new(
            Arc::new(CreateIngredientTypeUseCaseImpl {
                repository: ingredient_type_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetIngredientTypeByIdUseCaseImpl {
                repository: ingredient_type_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetIngredientTypeByNameUseCaseImpl {
                repository: ingredient_type_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RenameIngredientTypeUseCaseImpl {
                repository: ingredient_type_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteIngredientTypeUseCaseImpl {
                repository: ingredient_type_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ListIngredientTypesUseCaseImpl {
                repository: ingredient_type_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetIngredientTypeItemsUseCaseImpl {
                repository: ingredient_type_repository.clone(),
                ingredient_repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Ingredient and stock use cases
        let ingredient_api = IngredientApi::new(
            Arc::new(CreateIngredientUseCaseImpl {
                repository: ingredient_repository.clone(),
                type_repository: ingredient_type_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetIngredientByIdUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetIngredientByNameUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateIngredientUseCaseImpl {
                repository: ingredient_repository.clone(),
                type_repository: ingredient_type_repository,
                logger: logger.clone(),
            }),
            Arc::new(DeleteIngredientUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ListIngredientsUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetIngredientStockUseCaseImpl {
                repository: ingredient_repository.clone(),
                stock_repository: stock_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddStockUseCaseImpl {
                repository: ingredient_repository.clone(),
                stock_repository: stock_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveStockUseCaseImpl {
                repository: ingredient_repository.clone(),
                stock_repository: stock_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Recipe category use cases
        let recipe_category_api = RecipeCategoryApi::new(
            Arc::new(CreateRecipeCategoryUseCaseImpl {
                repository: recipe_category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetRecipeCategoryByIdUseCaseImpl {
                repository: recipe_category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetRecipeCategoryByNameUseCaseImpl {
                repository: recipe_category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RenameRecipeCategoryUseCaseImpl {
                repository: recipe_category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteRecipeCategoryUseCaseImpl {
                repository: recipe_category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ListRecipeCategoriesUseCaseImpl {
                repository: recipe_category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetRecipeCategoryItemsUseCaseImpl {
                repository: recipe_category_repository.clone(),
                recipe_repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Recipe use cases
        let recipe_api = RecipeApi::new(
            Arc::new(CreateRecipeUseCaseImpl {
                repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetRecipeUseCaseImpl {
                repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteRecipeUseCaseImpl {
                repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RecipeIngredientsUseCaseImpl {
                repository: recipe_repository.clone(),
                ingredient_repository,
                logger: logger.clone(),
            }),
            Arc::new(RecipeCategoriesUseCaseImpl {
                repository: recipe_repository.clone(),
                category_repository: recipe_category_repository,
                logger: logger.clone(),
            }),
            Arc::new(CheckRecipeUseCaseImpl {
                repository: recipe_repository.clone(),
                stock_repository: stock_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(CookRecipeUseCaseImpl {
                repository: recipe_repository,
                stock_repository,
                logger,
            }),
        );

        Self {
            health_api: HealthApi,
            ingredient_type_api,
            ingredient_api,
            recipe_category_api,
            recipe_api,
        }
    }
}
