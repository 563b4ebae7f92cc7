use std::{fs, path::Path};

use sqlx::SqlitePool;

/// Make sure the directory holding a file-backed SQLite database exists,
/// otherwise `create_if_missing` fails with a misleading "unable to open
/// database file" error.
pub fn ensure_sqlite_dir(db_url: &str) -> std::io::Result<()> {
    let path = if let Some(path) = db_url.strip_prefix("sqlite://") {
        Some(path)
    } else if let Some(path) = db_url.strip_prefix("sqlite:") {
        Some(path)
    } else {
        None
    };

    let Some(path) = path else {
        return Ok(());
    };

    let path = path.split('?').next().unwrap_or(path);
    if path == ":memory:" || path.is_empty() {
        return Ok(());
    }

    let path = path.strip_prefix("file:").unwrap_or(path);
    let db_path = Path::new(path);
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Create the four tables on startup if they are not there yet.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS barbers (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               name TEXT NOT NULL,
               specialty TEXT
           )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS services (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               name TEXT NOT NULL,
               duration_minutes INTEGER NOT NULL,
               price REAL NOT NULL
           )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS slot_templates (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               barber_id INTEGER NOT NULL REFERENCES barbers (id),
               date TEXT NOT NULL,
               start_time TEXT NOT NULL,
               end_time TEXT NOT NULL
           )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS appointments (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               client_name TEXT NOT NULL,
               client_phone TEXT,
               scheduled_at TEXT NOT NULL,
               barber_id INTEGER NOT NULL REFERENCES barbers (id),
               service_id INTEGER NOT NULL REFERENCES services (id),
               notes TEXT,
               status TEXT NOT NULL DEFAULT 'confirmado'
           )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
