use crate::EventRecord;

/// Token separating a distance-and-direction offset from the primary place
/// name in feed locations ("10km N of Ridgecrest, CA").
pub const LOCATION_SEPARATOR: &str = " of ";

/// Offset shown when the feed location carries no separator.
const FALLBACK_OFFSET: &str = "Near the";

/// A feed location split for two-line display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationView {
    pub offset: String,
    pub primary: String,
}

/// Splits a location at the first `" of "` into offset and primary parts.
///
/// "10km N of Ridgecrest, CA" → offset "10km N of", primary "Ridgecrest, CA".
/// Without a separator the offset falls back to "Near the".
pub fn split_location(location: &str) -> LocationView {
    match location.split_once(LOCATION_SEPARATOR) {
        Some((offset, primary)) => LocationView {
            offset: format!("{offset} of"),
            primary: primary.to_string(),
        },
        None => LocationView {
            offset: FALLBACK_OFFSET.to_string(),
            primary: location.to_string(),
        },
    }
}

/// Maps a magnitude to its display band in `1..=10`.
///
/// Bands follow `floor(magnitude)`, with everything below 2 collapsing into
/// band 1 and everything from 10 upwards into band 10.
pub fn magnitude_band(magnitude: f64) -> u8 {
    match magnitude.floor() as i64 {
        i64::MIN..=1 => 1,
        10..=i64::MAX => 10,
        band => band as u8,
    }
}

/// Formats a magnitude with exactly one decimal digit ("6.1", "0.0").
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{magnitude:.1}")
}

/// Display-ready projection of one [`EventRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventRowView {
    pub magnitude_label: String,
    pub band: u8,
    pub location_offset: String,
    pub location_primary: String,
    pub occurred_at_ms: i64,
    pub detail_url: Option<String>,
}

impl EventRowView {
    pub fn from_record(record: &EventRecord) -> Self {
        let location = split_location(&record.location);
        Self {
            magnitude_label: format_magnitude(record.magnitude),
            band: magnitude_band(record.magnitude),
            location_offset: location.offset,
            location_primary: location.primary,
            occurred_at_ms: record.occurred_at_ms,
            detail_url: record.detail_url.clone(),
        }
    }
}
