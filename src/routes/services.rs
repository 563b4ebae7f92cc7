use actix_web::{web, HttpResponse, Result};

use crate::{
    models::{NewService, Service},
    state::AppState,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/services/")
            .route(web::post().to(create))
            .route(web::get().to(list)),
    );
}

async fn create(state: web::Data<AppState>, payload: web::Json<NewService>) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let id = sqlx::query("INSERT INTO services (name, duration_minutes, price) VALUES (?, ?, ?)")
        .bind(&payload.name)
        .bind(payload.duration_minutes)
        .bind(payload.price)
        .execute(&state.db)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?
        .last_insert_rowid();

    Ok(HttpResponse::Ok().json(Service {
        id,
        name: payload.name,
        duration_minutes: payload.duration_minutes,
        price: payload.price,
    }))
}

async fn list(state: web::Data<AppState>) -> Result<HttpResponse> {
    let services =
        sqlx::query_as::<_, Service>("SELECT id, name, duration_minutes, price FROM services")
            .fetch_all(&state.db)
            .await
            .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(services))
}
