use std::net::IpAddr;

use crate::geofence::{DEFAULT_RADIUS_M, GeofenceReference};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// CORS origin allowed to post submissions. None means permissive.
    pub allowed_origin: Option<String>,
    pub max_body_size: usize,
    pub log_level: String,
    /// None disables the radius gate; submissions are then accepted anywhere.
    pub geofence: Option<GeofenceReference>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("GEOATTEND_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid GEOATTEND_HOST: {e}"))?;

        let port: u16 = env_or("GEOATTEND_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid GEOATTEND_PORT: {e}"))?;

        let allowed_origin = std::env::var("GEOATTEND_ALLOWED_ORIGIN").ok();

        let max_body_size: usize = env_or("GEOATTEND_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid GEOATTEND_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("GEOATTEND_LOG_LEVEL", "info");

        let geofence = match env_or("GEOATTEND_GEOFENCE", "on").as_str() {
            "off" => None,
            _ => Some(geofence_from_env()?),
        };

        Ok(Config {
            database_url,
            host,
            port,
            allowed_origin,
            max_body_size,
            log_level,
            geofence,
        })
    }
}

fn geofence_from_env() -> Result<GeofenceReference, String> {
    let latitude: f64 = env_or("GEOATTEND_EVENT_LAT", "30.4022")
        .parse()
        .map_err(|e| format!("Invalid GEOATTEND_EVENT_LAT: {e}"))?;
    let longitude: f64 = env_or("GEOATTEND_EVENT_LNG", "78.1288")
        .parse()
        .map_err(|e| format!("Invalid GEOATTEND_EVENT_LNG: {e}"))?;
    let radius_m: f64 = env_or("GEOATTEND_RADIUS_M", &DEFAULT_RADIUS_M.to_string())
        .parse()
        .map_err(|e| format!("Invalid GEOATTEND_RADIUS_M: {e}"))?;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(format!("GEOATTEND_EVENT_LAT out of range: {latitude}"));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(format!("GEOATTEND_EVENT_LNG out of range: {longitude}"));
    }
    if !radius_m.is_finite() || radius_m < 0.0 {
        return Err(format!("GEOATTEND_RADIUS_M must be non-negative: {radius_m}"));
    }

    Ok(GeofenceReference::new(latitude, longitude, radius_m))
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
