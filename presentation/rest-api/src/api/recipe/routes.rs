use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::recipe::use_cases::categories::{
    RecipeCategoriesUseCase, RecipeCategoryParams,
};
use business::domain::recipe::use_cases::check::{CheckRecipeParams, CheckRecipeUseCase};
use business::domain::recipe::use_cases::cook::{CookRecipeParams, CookRecipeUseCase};
use business::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};
use business::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use business::domain::recipe::use_cases::get::{GetRecipeParams, GetRecipeUseCase};
use business::domain::recipe::use_cases::ingredients::{
    AddRecipeIngredientParams, RecipeIngredientsUseCase, RemoveRecipeIngredientParams,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{
    AddRecipeIngredientRequest, CreateRecipeRequest, RecipeAssessmentResponse, RecipeResponse,
};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    create_use_case: Arc<dyn CreateRecipeUseCase>,
    get_use_case: Arc<dyn GetRecipeUseCase>,
    delete_use_case: Arc<dyn DeleteRecipeUseCase>,
    ingredients_use_case: Arc<dyn RecipeIngredientsUseCase>,
    categories_use_case: Arc<dyn RecipeCategoriesUseCase>,
    check_use_case: Arc<dyn CheckRecipeUseCase>,
    cook_use_case: Arc<dyn CookRecipeUseCase>,
}

impl RecipeApi {
    pub fn new(
        create_use_case: Arc<dyn CreateRecipeUseCase>,
        get_use_case: Arc<dyn GetRecipeUseCase>,
        delete_use_case: Arc<dyn DeleteRecipeUseCase>,
        ingredients_use_case: Arc<dyn RecipeIngredientsUseCase>,
        categories_use_case: Arc<dyn RecipeCategoriesUseCase>,
        check_use_case: Arc<dyn CheckRecipeUseCase>,
        cook_use_case: Arc<dyn CookRecipeUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_use_case,
            delete_use_case,
            ingredients_use_case,
            categories_use_case,
            check_use_case,
            cook_use_case,
        }
    }
}

/// Recipe management and cooking API
///
/// Recipes are addressed by name.
#[OpenApi]
impl RecipeApi {
    /// Create a recipe
    #[oai(path = "/recipe", method = "post", tag = "ApiTags::Recipes")]
    async fn create(&self, body: Json<CreateRecipeRequest>) -> RecipeResponseEnum {
        let body = body.0;
        let params = CreateRecipeParams {
            name: body.name,
            directions: body.directions,
            picture: body.picture,
            prepare_time: body.prepare_time,
            portions: body.portions,
        };
        match self.create_use_case.execute(params).await {
            Ok(recipe) => RecipeResponseEnum::Created(Json(recipe.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Get a recipe
    ///
    /// With `portions`, ingredient amounts are rescaled to that many portions.
    #[oai(path = "/recipe/:name", method = "get", tag = "ApiTags::Recipes")]
    async fn get(&self, name: Path<String>, portions: Query<Option<i32>>) -> RecipeResponseEnum {
        let params = GetRecipeParams {
            name: name.0,
            portions: portions.0,
        };
        match self.get_use_case.execute(params).await {
            Ok(recipe) => RecipeResponseEnum::Ok(Json(recipe.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    #[oai(path = "/recipe/:name", method = "delete", tag = "ApiTags::Recipes")]
    async fn delete(&self, name: Path<String>) -> DeleteRecipeResponse {
        let params = DeleteRecipeParams { name: name.0 };
        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteRecipeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteRecipeResponse::NotFound(json),
                    _ => DeleteRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an ingredient to a recipe
    #[oai(
        path = "/recipe/:name/ingredient",
        method = "post",
        tag = "ApiTags::Recipes"
    )]
    async fn add_ingredient(
        &self,
        name: Path<String>,
        body: Json<AddRecipeIngredientRequest>,
    ) -> RecipeResponseEnum {
        let params = AddRecipeIngredientParams {
            name: name.0,
            ingredient_id: body.0.ingredient_id,
            amount: body.0.amount,
        };
        match self.ingredients_use_case.add(params).await {
            Ok(recipe) => RecipeResponseEnum::Ok(Json(recipe.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    #[oai(
        path = "/recipe/:name/ingredient/:ingredient_id",
        method = "delete",
        tag = "ApiTags::Recipes"
    )]
    async fn remove_ingredient(
        &self,
        name: Path<String>,
        ingredient_id: Path<i32>,
    ) -> RecipeResponseEnum {
        let params = RemoveRecipeIngredientParams {
            name: name.0,
            ingredient_id: ingredient_id.0,
        };
        match self.ingredients_use_case.remove(params).await {
            Ok(recipe) => RecipeResponseEnum::Ok(Json(recipe.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Tag a recipe with a category
    #[oai(
        path = "/recipe/:name/category/:category_id",
        method = "post",
        tag = "ApiTags::Recipes"
    )]
    async fn add_category(
        &self,
        name: Path<String>,
        category_id: Path<i32>,
    ) -> RecipeResponseEnum {
        let params = RecipeCategoryParams {
            name: name.0,
            category_id: category_id.0,
        };
        match self.categories_use_case.add(params).await {
            Ok(recipe) => RecipeResponseEnum::Ok(Json(recipe.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    #[oai(
        path = "/recipe/:name/category/:category_id",
        method = "delete",
        tag = "ApiTags::Recipes"
    )]
    async fn remove_category(
        &self,
        name: Path<String>,
        category_id: Path<i32>,
    ) -> RecipeResponseEnum {
        let params = RecipeCategoryParams {
            name: name.0,
            category_id: category_id.0,
        };
        match self.categories_use_case.remove(params).await {
            Ok(recipe) => RecipeResponseEnum::Ok(Json(recipe.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Check whether a recipe can be cooked
    ///
    /// Reports missing amounts and prices the recipe from recent purchases.
    #[oai(path = "/recipe/:name/check", method = "get", tag = "ApiTags::Recipes")]
    async fn check(
        &self,
        name: Path<String>,
        portions: Query<Option<i32>>,
    ) -> RecipeAssessmentResponseEnum {
        let params = CheckRecipeParams {
            name: name.0,
            portions: portions.0,
        };
        match self.check_use_case.execute(params).await {
            Ok(assessment) => RecipeAssessmentResponseEnum::Ok(Json(assessment.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Cook a recipe
    ///
    /// Logs the cooking and takes the ingredients out of stock in one
    /// transaction. Fails with 422 and changes nothing when stock is short.
    #[oai(path = "/recipe/:name/cook", method = "post", tag = "ApiTags::Recipes")]
    async fn cook(
        &self,
        name: Path<String>,
        portions: Query<Option<i32>>,
    ) -> RecipeAssessmentResponseEnum {
        let params = CookRecipeParams {
            name: name.0,
            portions: portions.0,
        };
        match self.cook_use_case.execute(params).await {
            Ok(assessment) => RecipeAssessmentResponseEnum::Ok(Json(assessment.into())),
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecipeResponseEnum {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 201)]
    Created(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for RecipeResponseEnum {
    fn from((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            409 => Self::Conflict(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecipeAssessmentResponseEnum {
    #[oai(status = 200)]
    Ok(Json<RecipeAssessmentResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    NotEnoughIngredients(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for RecipeAssessmentResponseEnum {
    fn from((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            409 => Self::Conflict(json),
            422 => Self::NotEnoughIngredients(json),
            _ => Self::InternalError(json),
        }
    }
}
