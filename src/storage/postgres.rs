use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{AttendanceRecord, NewAttendance};

use super::{AttendanceStore, StoreError};

/// PostgreSQL-backed store.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceStore for PgStore {
    async fn insert(&self, record: NewAttendance) -> Result<AttendanceRecord, StoreError> {
        let stored = sqlx::query_as::<_, AttendanceRecord>(
            "INSERT INTO attendance
                (name, email, sap_id, course, batch_year, latitude, longitude, recorded_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.sap_id)
        .bind(&record.course)
        .bind(&record.batch_year)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(record.recorded_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }
}
