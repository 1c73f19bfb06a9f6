use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Parse a request body based on Content-Type. Accepts JSON and
/// form-urlencoded; anything else is tried as JSON first, then as a form.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| format!("Unable to parse body: {e}"))
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body_str.as_bytes()) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }
    Ok(Value::Object(map))
}

/// The fields a client may supply. Everything is optional at this stage;
/// the acceptor decides what is required.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub sap_id: Option<String>,
    pub course: Option<String>,
    pub batch_year: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl SubmissionRequest {
    /// Lenient extraction from a parsed body. Field names follow the client
    /// form (`sapId`, `batchYear`). Empty strings and non-finite numbers are
    /// treated as absent; a present-but-unparseable timestamp is an error.
    pub fn from_value(raw: &Value) -> Result<Self, String> {
        let timestamp = match raw.get("timestamp") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(
                DateTime::parse_from_rfc3339(s)
                    .map(|t| t.with_timezone(&Utc))
                    .map_err(|e| format!("Invalid timestamp: {e}"))?,
            ),
            Some(_) => return Err("Invalid timestamp: expected an RFC 3339 string".to_string()),
        };

        Ok(Self {
            name: text_field(raw, "name"),
            email: text_field(raw, "email"),
            sap_id: text_field(raw, "sapId"),
            course: text_field(raw, "course"),
            batch_year: text_or_number_field(raw, "batchYear"),
            latitude: numeric_field(raw, "latitude"),
            longitude: numeric_field(raw, "longitude"),
            timestamp,
        })
    }
}

fn text_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Like `text_field`, but a JSON number is also accepted (batch years are
/// often posted unquoted).
fn text_or_number_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => text_field(raw, key),
    }
}

/// A JSON number, or a string that parses as one. NaN and infinities are
/// treated as absent.
fn numeric_field(raw: &Value, key: &str) -> Option<f64> {
    let parsed = match raw.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}
