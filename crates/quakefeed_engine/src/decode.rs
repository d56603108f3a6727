use quakefeed_core::EventRecord;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("empty response body")]
    EmptyResponse,
    #[error("malformed feed root: {0}")]
    MalformedRoot(String),
}

/// Extracts event records from a GeoJSON feed body, in feed order.
///
/// Structural failures at the root are typed errors with no partial output.
/// Field-level problems inside a feature are absorbed into defaults: missing
/// or non-numeric `mag` becomes `0.0`, missing `place` becomes `""`, missing
/// `time` becomes `0`, missing `url` stays `None`. A feature is only dropped
/// when its `properties` object itself is absent or not an object.
pub fn decode_feed(body: &str) -> Result<Vec<EventRecord>, DecodeError> {
    if body.trim().is_empty() {
        return Err(DecodeError::EmptyResponse);
    }

    let root: Value =
        serde_json::from_str(body).map_err(|err| DecodeError::MalformedRoot(err.to_string()))?;
    let features = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| DecodeError::MalformedRoot("missing \"features\" array".to_string()))?;

    let mut records = Vec::with_capacity(features.len());
    for feature in features {
        let Some(properties) = feature.get("properties").and_then(Value::as_object) else {
            // Nothing to default from without a properties object.
            continue;
        };
        records.push(EventRecord {
            magnitude: properties.get("mag").and_then(Value::as_f64).unwrap_or(0.0),
            location: properties
                .get("place")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            occurred_at_ms: properties.get("time").and_then(Value::as_i64).unwrap_or(0),
            detail_url: properties
                .get("url")
                .and_then(Value::as_str)
                .map(str::to_string),
        });
    }

    Ok(records)
}
