use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::ingredient::errors::IngredientError;
use business::domain::ingredient::repository::IngredientQuery;
use business::domain::ingredient::use_cases::add_stock::{AddStockParams, AddStockUseCase};
use business::domain::ingredient::use_cases::create::{
    CreateIngredientParams, CreateIngredientUseCase,
};
use business::domain::ingredient::use_cases::delete::{
    DeleteIngredientParams, DeleteIngredientUseCase,
};
use business::domain::ingredient::use_cases::get_by_id::{
    GetIngredientByIdParams, GetIngredientByIdUseCase,
};
use business::domain::ingredient::use_cases::get_by_name::{
    GetIngredientByNameParams, GetIngredientByNameUseCase,
};
use business::domain::ingredient::use_cases::get_stock::{
    GetIngredientStockParams, GetIngredientStockUseCase,
};
use business::domain::ingredient::use_cases::list::ListIngredientsUseCase;
use business::domain::ingredient::use_cases::remove_stock::{
    RemoveStockParams, RemoveStockUseCase,
};
use business::domain::ingredient::use_cases::update::{
    UpdateIngredientParams, UpdateIngredientUseCase,
};
use business::domain::shared::listing::{Pagination, TextFilter};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::ingredient::dto::{
    AddStockRequest, CreateIngredientRequest, IngredientListingResponse, IngredientResponse,
    RemoveStockRequest, StockResponse, UpdateIngredientRequest,
};
use crate::api::tags::ApiTags;

pub struct IngredientApi {
    create_use_case: Arc<dyn CreateIngredientUseCase>,
    get_by_id_use_case: Arc<dyn GetIngredientByIdUseCase>,
    get_by_name_use_case: Arc<dyn GetIngredientByNameUseCase>,
    update_use_case: Arc<dyn UpdateIngredientUseCase>,
    delete_use_case: Arc<dyn DeleteIngredientUseCase>,
    list_use_case: Arc<dyn ListIngredientsUseCase>,
    get_stock_use_case: Arc<dyn GetIngredientStockUseCase>,
    add_stock_use_case: Arc<dyn AddStockUseCase>,
    remove_stock_use_case: Arc<dyn RemoveStockUseCase>,
}

impl IngredientApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateIngredientUseCase>,
        get_by_id_use_case: Arc<dyn GetIngredientByIdUseCase>,
        get_by_name_use_case: Arc<dyn GetIngredientByNameUseCase>,
        update_use_case: Arc<dyn UpdateIngredientUseCase>,
        delete_use_case: Arc<dyn DeleteIngredientUseCase>,
        list_use_case: Arc<dyn ListIngredientsUseCase>,
        get_stock_use_case: Arc<dyn GetIngredientStockUseCase>,
        add_stock_use_case: Arc<dyn AddStockUseCase>,
        remove_stock_use_case: Arc<dyn RemoveStockUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            get_by_name_use_case,
            update_use_case,
            delete_use_case,
            list_use_case,
            get_stock_use_case,
            add_stock_use_case,
            remove_stock_use_case,
        }
    }
}

/// Ingredient and stock management API
#[OpenApi]
impl IngredientApi {
    /// Create an ingredient
    ///
    /// Name, unit and an existing ingredient type are required.
    #[oai(path = "/ingredient", method = "post", tag = "ApiTags::Ingredients")]
    async fn create(&self, body: Json<CreateIngredientRequest>) -> IngredientResponseEnum {
        let body = body.0;
        let params = CreateIngredientParams {
            name: body.name,
            unit: body.unit,
            ingredient_type_id: body.ingredient_type,
            suggestion_threshold: body.suggestion_threshold,
            rebuy_threshold: body.rebuy_threshold,
            durability: body.durability,
        };
        match self.create_use_case.execute(params).await {
            Ok(created) => IngredientResponseEnum::Created(Json(created.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// List ingredients
    ///
    /// Filters are case-insensitive substrings; `ingredient_type` matches the type name.
    #[oai(path = "/ingredient", method = "get", tag = "ApiTags::Ingredients")]
    async fn list(
        &self,
        limit: Query<Option<i64>>,
        offset: Query<Option<i64>>,
        name: Query<Option<String>>,
        unit: Query<Option<String>>,
        ingredient_type: Query<Option<String>>,
    ) -> ListIngredientsResponse {
        let query = IngredientQuery {
            pagination: Pagination::new(limit.0, offset.0),
            name: TextFilter::new(name.0.as_deref()),
            unit: TextFilter::new(unit.0.as_deref()),
            ingredient_type: TextFilter::new(ingredient_type.0.as_deref()),
        };
        match self.list_use_case.execute(query).await {
            Ok(listing) => ListIngredientsResponse::Ok(Json(listing.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListIngredientsResponse::InternalError(json)
            }
        }
    }

    /// Get an ingredient
    #[oai(path = "/ingredient/:id", method = "get", tag = "ApiTags::Ingredients")]
    async fn get_by_id(&self, id: Path<i32>) -> IngredientResponseEnum {
        match self
            .get_by_id_use_case
            .execute(GetIngredientByIdParams { id: id.0 })
            .await
        {
            Ok(ingredient) => IngredientResponseEnum::Ok(Json(ingredient.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Find an ingredient by its exact name
    #[oai(
        path = "/ingredient/by_name/:name",
        method = "get",
        tag = "ApiTags::Ingredients"
    )]
    async fn get_by_name(&self, name: Path<String>) -> IngredientResponseEnum {
        match self
            .get_by_name_use_case
            .execute(GetIngredientByNameParams { name: name.0 })
            .await
        {
            Ok(ingredient) => IngredientResponseEnum::Ok(Json(ingredient.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Update an ingredient
    ///
    /// Only the fields present in the body change.
    #[oai(path = "/ingredient/:id", method = "patch", tag = "ApiTags::Ingredients")]
    async fn update(
        &self,
        id: Path<i32>,
        body: Json<UpdateIngredientRequest>,
    ) -> IngredientResponseEnum {
        let updates = body.0.into_updates();
        if updates.is_empty() {
            return IngredientError::MissingParameter("update")
                .into_error_response()
                .into();
        }

        let params = UpdateIngredientParams { id: id.0, updates };
        match self.update_use_case.execute(params).await {
            Ok(updated) => IngredientResponseEnum::Ok(Json(updated.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Delete an ingredient
    ///
    /// Its stock and recipe entries go with it.
    #[oai(path = "/ingredient/:id", method = "delete", tag = "ApiTags::Ingredients")]
    async fn delete(&self, id: Path<i32>) -> DeleteIngredientResponse {
        match self
            .delete_use_case
            .execute(DeleteIngredientParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteIngredientResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteIngredientResponse::NotFound(json),
                    409 => DeleteIngredientResponse::Conflict(json),
                    _ => DeleteIngredientResponse::InternalError(json),
                }
            }
        }
    }

    /// Get stock of an ingredient
    #[oai(
        path = "/ingredient/:id/stock",
        method = "get",
        tag = "ApiTags::Ingredients"
    )]
    async fn get_stock(&self, id: Path<i32>) -> StockResponseEnum {
        match self
            .get_stock_use_case
            .execute(GetIngredientStockParams { id: id.0 })
            .await
        {
            Ok(summary) => StockResponseEnum::Ok(Json(summary.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Record a purchase
    #[oai(
        path = "/ingredient/:id/stock",
        method = "post",
        tag = "ApiTags::Ingredients"
    )]
    async fn add_stock(&self, id: Path<i32>, body: Json<AddStockRequest>) -> StockResponseEnum {
        let params = AddStockParams {
            id: id.0,
            amount: body.0.amount,
            price: body.0.price,
            time_bought: body.0.time_bought,
        };
        match self.add_stock_use_case.execute(params).await {
            Ok(summary) => StockResponseEnum::Created(Json(summary.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Take an amount out of stock
    ///
    /// Consumes the most recent purchases first. Nothing changes when the
    /// stock is short (422).
    #[oai(
        path = "/ingredient/:id/stock/remove",
        method = "post",
        tag = "ApiTags::Ingredients"
    )]
    async fn remove_stock(
        &self,
        id: Path<i32>,
        body: Json<RemoveStockRequest>,
    ) -> StockResponseEnum {
        let params = RemoveStockParams {
            id: id.0,
            amount: body.0.amount,
        };
        match self.remove_stock_use_case.execute(params).await {
            Ok(summary) => StockResponseEnum::Ok(Json(summary.into())),
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum IngredientResponseEnum {
    #[oai(status = 200)]
    Ok(Json<IngredientResponse>),
    #[oai(status = 201)]
    Created(Json<IngredientResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for IngredientResponseEnum {
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
pub enum ListIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<IngredientListingResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteIngredientResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum StockResponseEnum {
    #[oai(status = 200)]
    Ok(Json<StockResponse>),
    #[oai(status = 201)]
    Created(Json<StockResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    NotEnoughStock(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<(StatusCode, Json<ErrorResponse>)> for StockResponseEnum {
    fn from((status, json): (StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            409 => Self::Conflict(json),
            422 => Self::NotEnoughStock(json),
            _ => Self::InternalError(json),
        }
    }
}
