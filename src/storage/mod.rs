pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;

use crate::models::{AttendanceRecord, NewAttendance};

/// Create-only persistence boundary for attendance records.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Insert a single record. Atomic: either the record is stored in full
    /// or nothing is written.
    async fn insert(&self, record: NewAttendance) -> Result<AttendanceRecord, StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "database error: {err}"),
            StoreError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}
