use actix_web::{HttpResponse, Responder};

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "payments-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
