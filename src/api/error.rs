use std::fmt::Formatter;

use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError, web};
use log::error;
use serde::{Deserialize, Serialize};

use crate::data::error::StoreError;

#[derive(Debug)]
pub enum ApiError {
    /// Payload missing a field or carrying one of the wrong type
    Validation(String),
    NotFound,
    Internal,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub detail: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ApiError::Validation(reason) => write!(f, "Invalid payload: {}", reason),
            ApiError::NotFound => write!(f, "Address not found"),
            ApiError::Internal => write!(f, "Internal server error"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorBody { detail: self.to_string() })
    }
}

impl From<BlockingError<StoreError>> for ApiError {
    fn from(error: BlockingError<StoreError>) -> Self {
        match error {
            BlockingError::Error(StoreError::NotFound) => ApiError::NotFound,
            BlockingError::Error(inner) => {
                error!("Error while accessing addresses: {}", inner);
                ApiError::Internal
            },
            BlockingError::Canceled => {
                error!("Address store call was canceled");
                ApiError::Internal
            },
        }
    }
}

/// JSON extractor settings: any body that fails to deserialize is a 422.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}
