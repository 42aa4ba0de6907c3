use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::ingredient_type::errors::IngredientTypeError;

use crate::api::error::{
    ErrorResponse, IntoErrorResponse, error_response, repository_error_response,
};

impl IntoErrorResponse for IngredientTypeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            IngredientTypeError::MissingParameter(_) => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }
            IngredientTypeError::DoesNotExist => {
                error_response(StatusCode::NOT_FOUND, "NotFound", self.to_string())
            }
            IngredientTypeError::AlreadyExists => {
                error_response(StatusCode::CONFLICT, "Conflict", self.to_string())
            }
            IngredientTypeError::Repository(err) => repository_error_response(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_each_error_to_status() {
        let cases = [
            (IngredientTypeError::MissingParameter("name"), 400),
            (IngredientTypeError::DoesNotExist, 404),
            (IngredientTypeError::AlreadyExists, 409),
            (IngredientTypeError::Repository(RepositoryError::Persistence), 409),
            (IngredientTypeError::Repository(RepositoryError::DatabaseError), 500),
        ];

        for (err, expected) in cases {
            let (status, _) = err.into_error_response();
            assert_eq!(status.as_u16(), expected);
        }
    }

    #[test]
    fn should_use_code_style_message() {
        let (_, json) = IngredientTypeError::MissingParameter("name").into_error_response();
        assert_eq!(json.0.message, "ingredient_type.missing_parameter.name");
        assert_eq!(json.0.name, "ValidationError");
    }
}
