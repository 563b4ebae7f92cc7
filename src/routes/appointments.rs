use actix_web::{web, HttpResponse, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::{Appointment, NewAppointment},
    state::AppState,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/appointments/")
            .route(web::post().to(create))
            .route(web::get().to(list)),
    )
    .service(
        web::resource("/appointments/{id}")
            .route(web::get().to(get_one))
            .route(web::put().to(update))
            .route(web::delete().to(delete)),
    );
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "detail": "Appointment not found" }))
}

async fn create(
    state: web::Data<AppState>,
    payload: web::Json<NewAppointment>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let status = payload.status().to_string();
    let id = sqlx::query(
        r#"INSERT INTO appointments
           (client_name, client_phone, scheduled_at, barber_id, service_id, notes, status)
           VALUES (?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(&payload.client_name)
    .bind(&payload.client_phone)
    .bind(payload.scheduled_at)
    .bind(payload.barber_id)
    .bind(payload.service_id)
    .bind(&payload.notes)
    .bind(&status)
    .execute(&state.db)
    .await
    .map_err(actix_web::error::ErrorInternalServerError)?
    .last_insert_rowid();

    Ok(HttpResponse::Ok().json(Appointment {
        id,
        client_name: payload.client_name,
        client_phone: payload.client_phone,
        scheduled_at: payload.scheduled_at,
        barber_id: payload.barber_id,
        service_id: payload.service_id,
        notes: payload.notes,
        status,
    }))
}

#[derive(Deserialize)]
struct AppointmentFilter {
    #[serde(rename = "barberId")]
    barber_id: Option<i64>,
    date: Option<NaiveDate>,
}

async fn list(
    state: web::Data<AppState>,
    query: web::Query<AppointmentFilter>,
) -> Result<HttpResponse> {
    // A date filter means the whole calendar day: [00:00, next day 00:00).
    let (day_start, day_end): (Option<NaiveDateTime>, Option<NaiveDateTime>) = match query.date {
        Some(date) => (
            Some(date.and_time(NaiveTime::MIN)),
            Some((date + Duration::days(1)).and_time(NaiveTime::MIN)),
        ),
        None => (None, None),
    };

    let rows = sqlx::query_as::<_, Appointment>(
        r#"SELECT id, client_name, client_phone, scheduled_at, barber_id, service_id, notes, status
           FROM appointments
           WHERE (?1 IS NULL OR barber_id = ?1)
             AND (?2 IS NULL OR (scheduled_at >= ?2 AND scheduled_at < ?3))"#,
    )
    .bind(query.barber_id)
    .bind(day_start)
    .bind(day_end)
    .fetch_all(&state.db)
    .await
    .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn get_one(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    let row = sqlx::query_as::<_, Appointment>(
        r#"SELECT id, client_name, client_phone, scheduled_at, barber_id, service_id, notes, status
           FROM appointments
           WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await
    .map_err(actix_web::error::ErrorInternalServerError)?;

    match row {
        Some(appointment) => Ok(HttpResponse::Ok().json(appointment)),
        None => Ok(not_found()),
    }
}

async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<NewAppointment>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    let status = payload.status().to_string();

    let updated = sqlx::query(
        r#"UPDATE appointments
           SET client_name = ?, client_phone = ?, scheduled_at = ?, barber_id = ?,
               service_id = ?, notes = ?, status = ?
           WHERE id = ?"#,
    )
    .bind(&payload.client_name)
    .bind(&payload.client_phone)
    .bind(payload.scheduled_at)
    .bind(payload.barber_id)
    .bind(payload.service_id)
    .bind(&payload.notes)
    .bind(&status)
    .bind(id)
    .execute(&state.db)
    .await
    .map_err(actix_web::error::ErrorInternalServerError)?
    .rows_affected();

    if updated == 0 {
        return Ok(not_found());
    }

    Ok(HttpResponse::Ok().json(Appointment {
        id,
        client_name: payload.client_name,
        client_phone: payload.client_phone,
        scheduled_at: payload.scheduled_at,
        barber_id: payload.barber_id,
        service_id: payload.service_id,
        notes: payload.notes,
        status,
    }))
}

async fn delete(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    let deleted = sqlx::query("DELETE FROM appointments WHERE id = ?")
        .bind(id)
        .execute(&state.db)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?
        .rows_affected();

    if deleted == 0 {
        return Ok(not_found());
    }
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}
