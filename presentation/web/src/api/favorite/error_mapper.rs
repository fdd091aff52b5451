use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::favorite::errors::FavoriteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FavoriteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FavoriteError::Serialization => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "favorite.serialization_failed",
            ),
            FavoriteError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
