use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{AttendanceRecord, NewAttendance};

use super::{AttendanceStore, StoreError};

/// In-process store for tests and local demos. `failing()` builds a store
/// whose inserts always fail, to exercise the persistence-error path.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<AttendanceRecord>>,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn records(&self) -> Vec<AttendanceRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn insert(&self, record: NewAttendance) -> Result<AttendanceRecord, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable(
                "memory store is configured to fail".to_string(),
            ));
        }

        let stored = AttendanceRecord {
            id: Uuid::now_v7(),
            name: record.name,
            email: record.email,
            sap_id: record.sap_id,
            course: record.course,
            batch_year: record.batch_year,
            latitude: record.latitude,
            longitude: record.longitude,
            recorded_at: record.recorded_at,
        };

        self.records.lock().await.push(stored.clone());
        Ok(stored)
    }
}
