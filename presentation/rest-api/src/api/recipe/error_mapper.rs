use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{
    ErrorResponse, IntoErrorResponse, error_response, repository_error_response,
};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            RecipeError::MissingParameter(_)
            | RecipeError::InvalidPortions
            | RecipeError::InvalidAmount => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }
            RecipeError::DoesNotExist
            | RecipeError::IngredientDoesNotExist
            | RecipeError::CategoryDoesNotExist
            | RecipeError::NotInRecipe => {
                error_response(StatusCode::NOT_FOUND, "NotFound", self.to_string())
            }
            RecipeError::AlreadyExists => {
                error_response(StatusCode::CONFLICT, "Conflict", self.to_string())
            }
            RecipeError::NotEnoughIngredients => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "NotEnoughIngredients",
                self.to_string(),
            ),
            RecipeError::Repository(err) => repository_error_response(err),
        }
    }
}
