use business::domain::errors::RepositoryError;
use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn error_response(
    status: StatusCode,
    name: &str,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            name: name.to_string(),
            message: message.into(),
        }),
    )
}

/// Shared mapping of store failures. A row still referenced elsewhere is a conflict.
pub fn repository_error_response(err: &RepositoryError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        RepositoryError::Persistence => {
            error_response(StatusCode::CONFLICT, "Conflict", err.to_string())
        }
        _ => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "InternalError",
            err.to_string(),
        ),
    }
}
