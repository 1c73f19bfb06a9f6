use crate::error::AppError;
use crate::models::NewAttendance;
use crate::state::AppState;

use super::SubmissionRequest;

/// Run a submission through the acceptance gates: required fields,
/// coordinate ranges, and the geofence (when configured). On success exactly
/// one record is written; every rejection writes nothing.
pub async fn accept(state: &AppState, req: SubmissionRequest) -> Result<&'static str, AppError> {
    let mut missing = Vec::new();
    if req.name.is_none() {
        missing.push("name");
    }
    if req.email.is_none() {
        missing.push("email");
    }
    if req.latitude.is_none() {
        missing.push("latitude");
    }
    if req.longitude.is_none() {
        missing.push("longitude");
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required field(s): {}.",
            missing.join(", ")
        )));
    }

    let (Some(name), Some(email), Some(latitude), Some(longitude)) =
        (req.name, req.email, req.latitude, req.longitude)
    else {
        return Err(AppError::Internal("required fields vanished".to_string()));
    };

    if !email.contains('@') {
        return Err(AppError::Validation("Invalid email address.".to_string()));
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(AppError::Validation(format!(
            "Latitude out of range: {latitude}."
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::Validation(format!(
            "Longitude out of range: {longitude}."
        )));
    }

    if let Some(fence) = &state.config.geofence {
        if !fence.contains(latitude, longitude) {
            tracing::debug!(latitude, longitude, "submission outside geofence");
            return Err(AppError::OutOfBounds);
        }
    }

    let record = NewAttendance {
        name,
        email,
        sap_id: req.sap_id,
        course: req.course,
        batch_year: req.batch_year,
        latitude,
        longitude,
        recorded_at: req.timestamp.unwrap_or_else(|| state.clock.now()),
    };

    let stored = state.store.insert(record).await?;
    tracing::debug!(id = %stored.id, "attendance recorded");

    Ok("Attendance saved successfully!")
}
