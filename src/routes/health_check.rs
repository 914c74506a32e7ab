use crate::configuration::Environment;
use crate::utils;
use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthReport {
    status: &'static str,
    timestamp: String,
    environment: &'static str,
}

pub async fn health_check(environment: web::Data<Environment>) -> HttpResponse {
    HttpResponse::Ok().json(HealthReport {
        status: "healthy",
        timestamp: utils::iso_timestamp(),
        environment: environment.as_str(),
    })
}
