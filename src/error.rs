use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Stable machine-readable code carried in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnknownGame(_) => "UNKNOWN_GAME",
            AppError::InvalidRule(_) => "INVALID_RULE",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::ConfigError(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownGame(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRule(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::UnknownGame(id) => {
                log::warn!("Unknown game requested: {id}");
                format!("Unknown game: {id}")
            }
            AppError::InvalidRule(msg) => {
                log::warn!("Invalid rule: {msg}");
                msg.clone()
            }
            AppError::InvalidRequest(msg) => {
                log::warn!("Invalid request: {msg}");
                msg.clone()
            }
            AppError::ConfigError(_) => {
                log::error!("Internal error: {self}");
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "error": {
                "code": self.code(),
                "message": message
            }
        }))
    }
}
