use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::recipe_category::use_cases::create::{
    CreateRecipeCategoryParams, CreateRecipeCategoryUseCase,
};
use business::domain::recipe_category::use_cases::delete::{
    DeleteRecipeCategoryParams, DeleteRecipeCategoryUseCase,
};
use business::domain::recipe_category::use_cases::get_by_id::{
    GetRecipeCategoryByIdParams, GetRecipeCategoryByIdUseCase,
};
use business::domain::recipe_category::use_cases::get_by_name::{
    GetRecipeCategoryByNameParams, GetRecipeCategoryByNameUseCase,
};
use business::domain::recipe_category::use_cases::items::{
    GetRecipeCategoryItemsParams, GetRecipeCategoryItemsUseCase,
};
use business::domain::recipe_category::use_cases::list::ListRecipeCategoriesUseCase;
use business::domain::recipe_category::use_cases::rename::{
    RenameRecipeCategoryParams, RenameRecipeCategoryUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::listing::name_query;
use crate::api::recipe::dto::RecipeResponse;
use crate::api::recipe_category::dto::{RecipeCategoryListingResponse, RecipeCategoryResponse};
use crate::api::tags::ApiTags;

pub struct RecipeCategoryApi {
    create_use_case: Arc<dyn CreateRecipeCategoryUseCase>,
    get_by_id_use_case: Arc<dyn GetRecipeCategoryByIdUseCase>,
    get_by_name_use_case: Arc<dyn GetRecipeCategoryByNameUseCase>,
    rename_use_case: Arc<dyn RenameRecipeCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteRecipeCategoryUseCase>,
    list_use_case: Arc<dyn ListRecipeCategoriesUseCase>,
    items_use_case: Arc<dyn GetRecipeCategoryItemsUseCase>,
}

impl RecipeCategoryApi {
    pub fn new(
        create_use_case: Arc<dyn CreateRecipeCategoryUseCase>,
        get_by_id_use_case: Arc<dyn GetRecipeCategoryByIdUseCase>,
        get_by_name_use_case: Arc<dyn GetRecipeCategoryByNameUseCase>,
        rename_use_case: Arc<dyn RenameRecipeCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteRecipeCategoryUseCase>,
        list_use_case: Arc<dyn ListRecipeCategoriesUseCase>,
        items_use_case: Arc<dyn GetRecipeCategoryItemsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            get_by_name_use_case,
            rename_use_case,
            delete_use_case,
            list_use_case,
            items_use_case,
        }
    }
}

/// Recipe category management API
#[OpenApi]
impl RecipeCategoryApi {
    #[oai(
        path = "/recipe_category",
        method = "get",
        tag = "ApiTags::RecipeCategories"
    )]
    async fn list(
        &self,
        limit: Query<Option<i64>>,
        offset: Query<Option<i64>>,
        name: Query<Option<String>>,
    ) -> ListRecipeCategoriesResponse {
        let query = name_query(limit.0, offset.0, name.0.as_deref());
        match self.list_use_case.execute(query).await {
            Ok(listing) => ListRecipeCategoriesResponse::Ok(Json(listing.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListRecipeCategoriesResponse::InternalError(json)
            }
        }
    }

    #[oai(
        path = "/recipe_category/new/:name",
        method = "post",
        tag = "ApiTags::RecipeCategories"
    )]
    async fn create(&self, name: Path<String>) -> RecipeCategoryResponseEnum {
        let params = CreateRecipeCategoryParams { name: name.0 };
        match self.create_use_case.execute(params).await {
            Ok(created) => RecipeCategoryResponseEnum::Created(Json(created.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    #[oai(
        path = "/recipe_category/:id",
        method = "get",
        tag = "ApiTags::RecipeCategories"
    )]
    async fn get_by_id(&self, id: Path<i32>) -> RecipeCategoryResponseEnum {
        let params = GetRecipeCategoryByIdParams { id: id.0 };
        match self.get_by_id_use_case.execute(params).await {
            Ok(category) => RecipeCategoryResponseEnum::Ok(Json(category.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    #[oai(
        path = "/recipe_category/by_name/:name",
        method = "get",
        tag = "ApiTags::RecipeCategories"
    )]
    async fn get_by_name(&self, name: Path<String>) -> RecipeCategoryResponseEnum {
        let params = GetRecipeCategoryByNameParams { name: name.0 };
        match self.get_by_name_use_case.execute(params).await {
            Ok(category) => RecipeCategoryResponseEnum::Ok(Json(category.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    #[oai(
        path = "/recipe_category/:id/name/:new_name",
        method = "post",
        tag = "ApiTags::RecipeCategories"
    )]
    async fn rename(&self, id: Path<i32>, new_name: Path<String>) -> RecipeCategoryResponseEnum {
        let params = RenameRecipeCategoryParams {
            id: id.0,
            new_name: new_name.0,
        };
        match self.rename_use_case.execute(params).await {
            Ok(renamed) => RecipeCategoryResponseEnum::Ok(Json(renamed.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Delete a recipe category
    ///
    /// Recipes lose the tag; the recipes themselves stay.
    #[oai(
        path = "/recipe_category/:id",
        method = "delete",
        tag = "ApiTags::RecipeCategories"
    )]
    async fn delete(&self, id: Path<i32>) -> DeleteRecipeCategoryResponse {
        let params = DeleteRecipeCategoryParams { id: id.0 };
        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteRecipeCategoryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteRecipeCategoryResponse::NotFound(json),
                    _ => DeleteRecipeCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// List the recipes tagged with a category
    #[oai(
        path = "/recipe_category/:id/items",
        method = "get",
        tag = "ApiTags::RecipeCategories"
    )]
    async fn items(&self, id: Path<i32>) -> RecipeCategoryItemsResponse {
        let params = GetRecipeCategoryItemsParams { id: id.0 };
        match self.items_use_case.execute(params).await {
            Ok(recipes) => RecipeCategoryItemsResponse::Ok(Json(
                recipes.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RecipeCategoryItemsResponse::NotFound(json),
                    _ => RecipeCategoryItemsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListRecipeCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeCategoryListingResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecipeCategoryResponseEnum {
    #[oai(status = 200)]
    Ok(Json<RecipeCategoryResponse>),
    #[oai(status = 201)]
    Created(Json<RecipeCategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for RecipeCategoryResponseEnum {
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
pub enum DeleteRecipeCategoryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecipeCategoryItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
