use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// The `{success, message}` envelope every contact route answers with.
#[derive(Debug, Serialize)]
pub struct ApiMessage<'a> {
    pub success: bool,
    pub message: &'a str,
}

pub fn json_success(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(ApiMessage {
        success: true,
        message,
    })
}

pub fn json_failure(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ApiMessage {
        success: false,
        message,
    })
}
