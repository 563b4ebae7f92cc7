use actix_web::{web, HttpResponse, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    availability,
    models::{Appointment, Barber, NewBarber},
    state::AppState,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/barbers/")
            .route(web::post().to(create))
            .route(web::get().to(list)),
    )
    .service(web::resource("/barbers/{id}/appointments/").route(web::get().to(appointments)))
    .service(web::resource("/barbers/{id}/available-dates/").route(web::get().to(available_dates)))
    .service(web::resource("/barbers/{id}/available-times/").route(web::get().to(available_times)));
}

async fn create(state: web::Data<AppState>, payload: web::Json<NewBarber>) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let id = sqlx::query("INSERT INTO barbers (name, specialty) VALUES (?, ?)")
        .bind(&payload.name)
        .bind(&payload.specialty)
        .execute(&state.db)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?
        .last_insert_rowid();

    Ok(HttpResponse::Ok().json(Barber {
        id,
        name: payload.name,
        specialty: payload.specialty,
    }))
}

async fn list(state: web::Data<AppState>) -> Result<HttpResponse> {
    let barbers = sqlx::query_as::<_, Barber>("SELECT id, name, specialty FROM barbers")
        .fetch_all(&state.db)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(barbers))
}

async fn appointments(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let barber_id = path.into_inner();
    let rows = sqlx::query_as::<_, Appointment>(
        r#"SELECT id, client_name, client_phone, scheduled_at, barber_id, service_id, notes, status
           FROM appointments
           WHERE barber_id = ?"#,
    )
    .bind(barber_id)
    .fetch_all(&state.db)
    .await
    .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(rows))
}

async fn available_dates(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let barber_id = path.into_inner();
    let dates = availability::available_dates(&state.db, barber_id)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(dates))
}

#[derive(Deserialize)]
struct DateQuery {
    date: NaiveDate,
}

async fn available_times(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<DateQuery>,
) -> Result<HttpResponse> {
    let barber_id = path.into_inner();
    let times: Vec<String> = availability::free_slots(&state.db, barber_id, query.date)
        .await
        .map_err(actix_web::error::ErrorInternalServerError)?
        .into_iter()
        .map(availability::format_slot)
        .collect();
    Ok(HttpResponse::Ok().json(times))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::routes::test_support::{book_at, seed_barber, seed_service, test_state};

    #[actix_web::test]
    async fn create_then_list_round_trips() {
        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::configure),
        )
        .await;

        let resp = test::TestRequest::post()
            .uri("/barbers/")
            .set_json(json!({ "name": "Carlos", "specialty": "fades" }))
            .send_request(&app)
            .await;
        assert!(resp.status().is_success());
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["name"], "Carlos");
        assert!(created["id"].as_i64().is_some());

        let listed: Vec<Value> = test::read_body_json(
            test::TestRequest::get()
                .uri("/barbers/")
                .send_request(&app)
                .await,
        )
        .await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["specialty"], "fades");
    }

    #[actix_web::test]
    async fn available_times_skips_booked_morning() {
        let state = test_state().await;
        let barber = seed_barber(&state).await;
        let service = seed_service(&state).await;
        book_at(&state, barber, service, "2024-03-01 09:00:00").await;
        book_at(&state, barber, service, "2024-03-01 10:00:00").await;

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::configure),
        )
        .await;

        let times: Vec<String> = test::read_body_json(
            test::TestRequest::get()
                .uri(&format!("/barbers/{barber}/available-times/?date=2024-03-01"))
                .send_request(&app)
                .await,
        )
        .await;
        assert_eq!(
            times,
            vec![
                "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00", "19:00",
                "20:00"
            ]
        );
    }

    #[actix_web::test]
    async fn available_dates_covers_the_horizon_for_a_free_barber() {
        let state = test_state().await;
        let barber = seed_barber(&state).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::configure),
        )
        .await;

        let dates: Vec<String> = test::read_body_json(
            test::TestRequest::get()
                .uri(&format!("/barbers/{barber}/available-dates/"))
                .send_request(&app)
                .await,
        )
        .await;
        assert_eq!(dates.len(), 30);
    }

    #[actix_web::test]
    async fn appointments_by_barber_only_lists_their_own() {
        let state = test_state().await;
        let first = seed_barber(&state).await;
        let second = seed_barber(&state).await;
        let service = seed_service(&state).await;
        book_at(&state, first, service, "2024-05-01 11:00:00").await;
        book_at(&state, second, service, "2024-05-01 11:00:00").await;

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::configure),
        )
        .await;

        let rows: Vec<Value> = test::read_body_json(
            test::TestRequest::get()
                .uri(&format!("/barbers/{first}/appointments/"))
                .send_request(&app)
                .await,
        )
        .await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["barber_id"].as_i64(), Some(first));
    }
}
