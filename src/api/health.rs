use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::configuration::Settings;
use crate::model::relay::{HealthResponse, ServiceEndpoints, ServiceInfo};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "서버가 정상 동작 중", body = HealthResponse)
    ),
    tag = "health check",
)]
#[get("/health")]
pub async fn health_check(settings: web::Data<Settings>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        webhook_configured: settings.webhook_configured(),
    })
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "서비스 설명", body = ServiceInfo)
    ),
    tag = "service info",
)]
#[get("/")]
pub async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        service: "Sentry to Teams Webhook Proxy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ServiceEndpoints {
            health: "/health".to_string(),
            webhook: "/teams-hook (POST)".to_string(),
        },
    })
}
