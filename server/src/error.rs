use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use padron::{remote::StoreError, validate::FieldErrors};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error en el formulario")]
    Invalid(FieldErrors),

    #[error("No autorizado")]
    Unauthorized,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Invalid(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "No autorizado").into_response()
            }
            AppError::Store(e) => (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use padron::models::Field;

    use super::*;

    #[test]
    fn test_validation_maps_to_422() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Cedula, "La cédula es requerida");

        let response = AppError::Invalid(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_store_failure_maps_to_502() {
        let response = AppError::Store(StoreError::Rejected {
            status: 500,
            message: "down".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
