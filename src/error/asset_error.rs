use crate::constant::{FAILED_TO_READ_FILE, FILE_NOT_FOUND};
use crate::utils;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum AssetError {
    #[error("Asset '{0}' does not exist.")]
    NotFound(String),

    #[error("'{0}' is not a plain file name.")]
    InvalidFileName(String),

    #[error("Failed to open asset '{0}'.")]
    Io(String, #[source] std::io::Error),
}

impl Debug for AssetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl ResponseError for AssetError {
    fn status_code(&self) -> StatusCode {
        match self {
            AssetError::NotFound(_) | AssetError::InvalidFileName(_) => StatusCode::NOT_FOUND,
            AssetError::Io(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let message = match self {
            AssetError::NotFound(_) | AssetError::InvalidFileName(_) => FILE_NOT_FOUND,
            AssetError::Io(..) => FAILED_TO_READ_FILE,
        };
        utils::json_failure(self.status_code(), message)
    }
}
