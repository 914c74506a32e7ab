use actix_web::HttpResponse;
use serde_json::json;

#[tracing::instrument(name = "/: Service descriptor")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Portfolio Backend API",
        "status": "running",
        "endpoints": {
            "contact": "/api/contact",
            "resume": "/api/download/resume",
            "health": "/api/health",
            "video": "/api/video/:filename"
        }
    }))
}
