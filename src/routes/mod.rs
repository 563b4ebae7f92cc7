use actix_web::{web, HttpResponse};

pub mod appointments;
pub mod barbers;
pub mod services;
pub mod slot_templates;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}
