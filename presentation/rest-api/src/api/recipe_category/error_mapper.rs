use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe_category::errors::RecipeCategoryError;

use crate::api::error::{
    ErrorResponse, IntoErrorResponse, error_response, repository_error_response,
};

impl IntoErrorResponse for RecipeCategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            RecipeCategoryError::MissingParameter(_) => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }
            RecipeCategoryError::DoesNotExist => {
                error_response(StatusCode::NOT_FOUND, "NotFound", self.to_string())
            }
            RecipeCategoryError::AlreadyExists => {
                error_response(StatusCode::CONFLICT, "Conflict", self.to_string())
            }
            RecipeCategoryError::Repository(err) => repository_error_response(err),
        }
    }
}
