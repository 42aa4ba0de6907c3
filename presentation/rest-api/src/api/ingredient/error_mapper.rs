use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::ingredient::errors::IngredientError;

use crate::api::error::{
    ErrorResponse, IntoErrorResponse, error_response, repository_error_response,
};

impl IntoErrorResponse for IngredientError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            IngredientError::MissingParameter(_) | IngredientError::InvalidAmount => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }
            IngredientError::DoesNotExist | IngredientError::TypeDoesNotExist => {
                error_response(StatusCode::NOT_FOUND, "NotFound", self.to_string())
            }
            IngredientError::AlreadyExists => {
                error_response(StatusCode::CONFLICT, "Conflict", self.to_string())
            }
            IngredientError::NotEnoughStock => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "NotEnoughStock",
                self.to_string(),
            ),
            IngredientError::Repository(err) => repository_error_response(err),
        }
    }
}
