use std::sync::Arc;

use crate::clock::Clock;
use crate::config::Config;
use crate::storage::AttendanceStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn AttendanceStore>,
    pub clock: Arc<dyn Clock>,
    pub config: Config,
}
