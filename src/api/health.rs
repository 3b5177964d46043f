use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::store::EntityStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub store_backend: String,
    pub store_status: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Store is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn EntityStore>) -> impl Responder {
    let store_up = match store.health_check().await {
        Ok(()) => true,
        Err(e) => {
            log::error!("❌ Store health check failed: {}", e);
            false
        }
    };

    let body = HealthResponse {
        status: if store_up { "healthy" } else { "unhealthy" }.to_string(),
        service: "classroom-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store_backend: store.backend_name().to_string(),
        store_status: if store_up { "up" } else { "down" }.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    if store_up {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
