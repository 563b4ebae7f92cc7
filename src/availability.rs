use chrono::{Duration, Local, NaiveDate, NaiveTime};
use sqlx::SqlitePool;

/// First bookable hour of the day (inclusive).
pub const OPENING_HOUR: u32 = 9;
/// Hour the shop closes (exclusive); the last candidate slot is 20:00.
pub const CLOSING_HOUR: u32 = 21;
/// How many calendar days ahead, starting today, the date scan covers.
pub const BOOKING_HORIZON_DAYS: i64 = 30;

/// Free whole-hour slots for a barber on a date, ascending.
///
/// A slot is taken only when an appointment exists at exactly that timestamp;
/// service duration is not considered, so a long service does not block the
/// following hours. An unknown barber id matches no appointments and yields
/// every slot.
pub async fn free_slots(
    pool: &SqlitePool,
    barber_id: i64,
    date: NaiveDate,
) -> Result<Vec<NaiveTime>, sqlx::Error> {
    let mut slots = Vec::new();
    for hour in OPENING_HOUR..CLOSING_HOUR {
        let Some(slot) = NaiveTime::from_hms_opt(hour, 0, 0) else {
            continue;
        };
        let taken = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM appointments WHERE barber_id = ? AND scheduled_at = ? LIMIT 1",
        )
        .bind(barber_id)
        .bind(date.and_time(slot))
        .fetch_optional(pool)
        .await?;

        if taken.is_none() {
            slots.push(slot);
        }
    }
    Ok(slots)
}

/// Dates within the next [`BOOKING_HORIZON_DAYS`] days (today inclusive) that
/// still have at least one free slot, ascending.
pub async fn available_dates(
    pool: &SqlitePool,
    barber_id: i64,
) -> Result<Vec<NaiveDate>, sqlx::Error> {
    let today = Local::now().date_naive();
    let mut dates = Vec::new();
    for offset in 0..BOOKING_HORIZON_DAYS {
        let day = today + Duration::days(offset);
        if !free_slots(pool, barber_id, day).await?.is_empty() {
            dates.push(day);
        }
    }
    Ok(dates)
}

/// Zero-padded 24h rendering, e.g. "09:00".
pub fn format_slot(slot: NaiveTime) -> String {
    slot.format("%H:%M").to_string()
}
