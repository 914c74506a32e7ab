use crate::constant::{EMAIL_CONFIGURATION_ERROR, FAILED_TO_SEND_MESSAGE};
use crate::domain::InvalidReason;
use crate::error::DispatchError;
use crate::utils;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(InvalidReason),

    #[error("Failed to deliver the contact emails.")]
    DispatchError(#[source] DispatchError),
}

impl ContactError {
    /// The only text a caller ever sees. The source chain stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ContactError::ValidationError(reason) => reason.as_str(),
            ContactError::DispatchError(e) if e.is_authentication() => EMAIL_CONFIGURATION_ERROR,
            ContactError::DispatchError(_) => FAILED_TO_SEND_MESSAGE,
        }
    }
}

// We are still using a bespoke implementation of `Debug`
// to get a nice report using the error source chain
impl Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::DispatchError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        utils::json_failure(self.status_code(), self.public_message())
    }
}
