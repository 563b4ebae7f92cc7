use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STATUS: &str = "confirmado";

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Barber {
    pub id: i64,
    pub name: String,
    pub specialty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewBarber {
    pub name: String,
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub duration_minutes: i64,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct NewService {
    pub name: String,
    pub duration_minutes: i64,
    pub price: f64,
}

/// A declared working window for a barber on a date. Stored and listed via
/// the API but not consulted by the availability calculator, which works off
/// the fixed opening hours instead.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SlotTemplate {
    pub id: i64,
    pub barber_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Deserialize)]
pub struct NewSlotTemplate {
    pub barber_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: i64,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub scheduled_at: NaiveDateTime,
    pub barber_id: i64,
    pub service_id: i64,
    pub notes: Option<String>,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct NewAppointment {
    pub client_name: String,
    pub client_phone: Option<String>,
    pub scheduled_at: NaiveDateTime,
    pub barber_id: i64,
    pub service_id: i64,
    pub notes: Option<String>,
    pub status: Option<String>,
}

impl NewAppointment {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }
}
