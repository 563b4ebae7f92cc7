use actix_web::{web, HttpResponse, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    models::{NewSlotTemplate, SlotTemplate},
    state::AppState,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/available-slot-templates/")
            .route(web::post().to(create))
            .route(web::get().to(list)),
    );
}

async fn create(
    state: web::Data<AppState>,
    payload: web::Json<NewSlotTemplate>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let id = sqlx::query(
        "INSERT INTO slot_templates (barber_id, date, start_time, end_time) VALUES (?, ?, ?, ?)",
    )
    .bind(payload.barber_id)
    .bind(payload.date)
    .bind(payload.start_time)
    .bind(payload.end_time)
    .execute(&state.db)
    .await
    .map_err(actix_web::error::ErrorInternalServerError)?
    .last_insert_rowid();

    Ok(HttpResponse::Ok().json(SlotTemplate {
        id,
        barber_id: payload.barber_id,
        date: payload.date,
        start_time: payload.start_time,
        end_time: payload.end_time,
    }))
}

#[derive(Deserialize)]
struct TemplateFilter {
    #[serde(rename = "barberId")]
    barber_id: Option<i64>,
    date: Option<NaiveDate>,
}

async fn list(
    state: web::Data<AppState>,
    query: web::Query<TemplateFilter>,
) -> Result<HttpResponse> {
    let rows = sqlx::query_as::<_, SlotTemplate>(
        r#"SELECT id, barber_id, date, start_time, end_time
           FROM slot_templates
           WHERE (?1 IS NULL OR barber_id = ?1)
             AND (?2 IS NULL OR date = ?2)"#,
    )
    .bind(query.barber_id)
    .bind(query.date)
    .fetch_all(&state.db)
    .await
    .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(rows))
}
