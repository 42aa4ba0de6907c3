use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::ingredient_type::use_cases::create::{
    CreateIngredientTypeParams, CreateIngredientTypeUseCase,
};
use business::domain::ingredient_type::use_cases::delete::{
    DeleteIngredientTypeParams, DeleteIngredientTypeUseCase,
};
use business::domain::ingredient_type::use_cases::get_by_id::{
    GetIngredientTypeByIdParams, GetIngredientTypeByIdUseCase,
};
use business::domain::ingredient_type::use_cases::get_by_name::{
    GetIngredientTypeByNameParams, GetIngredientTypeByNameUseCase,
};
use business::domain::ingredient_type::use_cases::items::{
    GetIngredientTypeItemsParams, GetIngredientTypeItemsUseCase,
};
use business::domain::ingredient_type::use_cases::list::ListIngredientTypesUseCase;
use business::domain::ingredient_type::use_cases::rename::{
    RenameIngredientTypeParams, RenameIngredientTypeUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::ingredient::dto::IngredientResponse;
use crate::api::ingredient_type::dto::{
    IngredientTypeCreatedBody, IngredientTypeEnvelope, IngredientTypeListingResponse,
    IngredientTypeRenamedBody, StatusCodeBody, StatusOkBody,
};
use crate::api::listing::name_query;
use crate::api::tags::ApiTags;

pub struct IngredientTypeApi {
    create_use_case: Arc<dyn CreateIngredientTypeUseCase>,
    get_by_id_use_case: Arc<dyn GetIngredientTypeByIdUseCase>,
    get_by_name_use_case: Arc<dyn GetIngredientTypeByNameUseCase>,
    rename_use_case: Arc<dyn RenameIngredientTypeUseCase>,
    delete_use_case: Arc<dyn DeleteIngredientTypeUseCase>,
    list_use_case: Arc<dyn ListIngredientTypesUseCase>,
    items_use_case: Arc<dyn GetIngredientTypeItemsUseCase>,
}

impl IngredientTypeApi {
    pub fn new(
        create_use_case: Arc<dyn CreateIngredientTypeUseCase>,
        get_by_id_use_case: Arc<dyn GetIngredientTypeByIdUseCase>,
        get_by_name_use_case: Arc<dyn GetIngredientTypeByNameUseCase>,
        rename_use_case: Arc<dyn RenameIngredientTypeUseCase>,
        delete_use_case: Arc<dyn DeleteIngredientTypeUseCase>,
        list_use_case: Arc<dyn ListIngredientTypesUseCase>,
        items_use_case: Arc<dyn GetIngredientTypeItemsUseCase>,
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

/// Ingredient type management API
#[OpenApi]
impl IngredientTypeApi {
    /// List ingredient types
    ///
    /// Case-insensitive substring filter on the name, ordered by name.
    #[oai(
        path = "/ingredient_type",
        method = "get",
        tag = "ApiTags::IngredientTypes"
    )]
    async fn list(
        &self,
        limit: Query<Option<i64>>,
        offset: Query<Option<i64>>,
        name: Query<Option<String>>,
    ) -> ListIngredientTypesResponse {
        let query = name_query(limit.0, offset.0, name.0.as_deref());
        match self.list_use_case.execute(query).await {
            Ok(listing) => ListIngredientTypesResponse::Ok(Json(listing.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListIngredientTypesResponse::InternalError(json)
            }
        }
    }

    /// Create an ingredient type
    #[oai(
        path = "/ingredient_type/new/:name",
        method = "post",
        tag = "ApiTags::IngredientTypes"
    )]
    async fn create(&self, name: Path<String>) -> CreateIngredientTypeResponse {
        let params = CreateIngredientTypeParams { name: name.0 };
        match self.create_use_case.execute(params).await {
            Ok(created) => CreateIngredientTypeResponse::Created(Json(IngredientTypeCreatedBody {
                status: "OK".to_string(),
                id: created.id,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateIngredientTypeResponse::BadRequest(json),
                    409 => CreateIngredientTypeResponse::Conflict(json),
                    _ => CreateIngredientTypeResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an ingredient type
    #[oai(
        path = "/ingredient_type/:id",
        method = "get",
        tag = "ApiTags::IngredientTypes"
    )]
    async fn get_by_id(&self, id: Path<i32>) -> GetIngredientTypeResponse {
        let params = GetIngredientTypeByIdParams { id: id.0 };
        let result = self.get_by_id_use_case.execute(params).await;
        match result {
            Ok(ingredient_type) => GetIngredientTypeResponse::Ok(Json(IngredientTypeEnvelope {
                ingredient_type: ingredient_type.into(),
            })),
            Err(err) => GetIngredientTypeResponse::from_error(err.into_error_response()),
        }
    }

    /// Find an ingredient type by its exact name
    #[oai(
        path = "/ingredient_type/by_name/:name",
        method = "get",
        tag = "ApiTags::IngredientTypes"
    )]
    async fn get_by_name(&self, name: Path<String>) -> GetIngredientTypeResponse {
        let params = GetIngredientTypeByNameParams { name: name.0 };
        match self.get_by_name_use_case.execute(params).await {
            Ok(ingredient_type) => GetIngredientTypeResponse::Ok(Json(IngredientTypeEnvelope {
                ingredient_type: ingredient_type.into(),
            })),
            Err(err) => GetIngredientTypeResponse::from_error(err.into_error_response()),
        }
    }

    /// Rename an ingredient type
    #[oai(
        path = "/ingredient_type/:id/name/:new_name",
        method = "post",
        tag = "ApiTags::IngredientTypes"
    )]
    async fn rename(&self, id: Path<i32>, new_name: Path<String>) -> RenameIngredientTypeResponse {
        let params = RenameIngredientTypeParams {
            id: id.0,
            new_name: new_name.0,
        };
        match self.rename_use_case.execute(params).await {
            Ok(renamed) => RenameIngredientTypeResponse::Ok(Json(IngredientTypeRenamedBody {
                status: "OK".to_string(),
                new_name: renamed.name,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RenameIngredientTypeResponse::BadRequest(json),
                    404 => RenameIngredientTypeResponse::NotFound(Json(StatusCodeBody::not_found())),
                    409 => RenameIngredientTypeResponse::Conflict(json),
                    _ => RenameIngredientTypeResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an ingredient type
    ///
    /// Fails with 409 while ingredients still reference the type.
    #[oai(
        path = "/ingredient_type/:id",
        method = "delete",
        tag = "ApiTags::IngredientTypes"
    )]
    async fn delete(&self, id: Path<i32>) -> DeleteIngredientTypeResponse {
        let params = DeleteIngredientTypeParams { id: id.0 };
        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteIngredientTypeResponse::Accepted(Json(StatusOkBody::ok())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteIngredientTypeResponse::NotFound(Json(StatusCodeBody::not_found())),
                    409 => DeleteIngredientTypeResponse::Conflict(json),
                    _ => DeleteIngredientTypeResponse::InternalError(json),
                }
            }
        }
    }

    /// List the ingredients of a type
    #[oai(
        path = "/ingredient_type/:id/items",
        method = "get",
        tag = "ApiTags::IngredientTypes"
    )]
    async fn items(&self, id: Path<i32>) -> IngredientTypeItemsResponse {
        let params = GetIngredientTypeItemsParams { id: id.0 };
        match self.items_use_case.execute(params).await {
            Ok(items) => IngredientTypeItemsResponse::Ok(Json(
                items.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => IngredientTypeItemsResponse::NotFound(json),
                    _ => IngredientTypeItemsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListIngredientTypesResponse {
    #[oai(status = 200)]
    Ok(Json<IngredientTypeListingResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateIngredientTypeResponse {
    #[oai(status = 201)]
    Created(Json<IngredientTypeCreatedBody>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetIngredientTypeResponse {
    #[oai(status = 200)]
    Ok(Json<IngredientTypeEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<StatusCodeBody>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl GetIngredientTypeResponse {
    fn from_error((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        if status == StatusCode::NOT_FOUND {
            Self::NotFound(Json(StatusCodeBody::not_found()))
        } else {
            Self::InternalError(json)
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RenameIngredientTypeResponse {
    #[oai(status = 200)]
    Ok(Json<IngredientTypeRenamedBody>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<StatusCodeBody>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteIngredientTypeResponse {
    #[oai(status = 202)]
    Accepted(Json<StatusOkBody>),
    #[oai(status = 404)]
    NotFound(Json<StatusCodeBody>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum IngredientTypeItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<IngredientResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
