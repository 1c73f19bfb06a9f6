use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One accepted attendance submission. Created exactly once, never updated.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub sap_id: Option<String>,
    pub course: Option<String>,
    pub batch_year: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}

/// A validated submission ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub name: String,
    pub email: String,
    pub sap_id: Option<String>,
    pub course: Option<String>,
    pub batch_year: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}
