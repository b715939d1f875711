use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::repository::RepositoryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Hot sauce not found")]
    NotFound,

    #[error("Invalid {param} value: {value:?} is not a whole number")]
    InvalidHeat { param: &'static str, value: String },

    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Store error: {0}")]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            AppError::InvalidHeat { .. } | AppError::MalformedPayload => StatusCode::BAD_REQUEST,
            AppError::Repository(ref e) => {
                error!("Request failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_client_error() {
            warn!("Rejected request: {self}");
        }

        (status, self.to_string()).into_response()
    }
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Store unavailable: {0}")]
    Store(#[from] RepositoryError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        let invalid = AppError::InvalidHeat {
            param: "minHeat",
            value: "hot".to_string(),
        };

        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MalformedPayload.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn invalid_heat_names_the_parameter() {
        let invalid = AppError::InvalidHeat {
            param: "maxHeat",
            value: "lots".to_string(),
        };

        assert_eq!(
            invalid.to_string(),
            r#"Invalid maxHeat value: "lots" is not a whole number"#
        );
    }
}
