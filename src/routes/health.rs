use actix_web::{web, HttpResponse, Responder};

use crate::models::HealthResponse;

/// Name reported by the health endpoint
#[derive(Debug, Clone)]
pub struct ServiceIdentity {
    pub name: String,
}

pub fn configure(cfg: &mut web::ServiceConfig, service_name: &str) {
    cfg.app_data(web::Data::new(ServiceIdentity {
        name: service_name.to_string(),
    }))
    .service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .default_service(web::to(|| async { HttpResponse::MethodNotAllowed().finish() })),
    );
}

/// Health check endpoint
async fn health_check(identity: web::Data<ServiceIdentity>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: identity.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
