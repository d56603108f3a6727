/// One decoded seismic event, as extracted from the feed.
///
/// Records are built once by the decoder and never mutated afterwards; a new
/// load cycle replaces the previous collection wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Magnitude of the event; `0.0` when the feed omitted it.
    pub magnitude: f64,
    /// Human-readable place description, possibly prefixed with a
    /// distance-and-direction offset ("10km N of ..."). Empty when absent.
    pub location: String,
    /// Event time in milliseconds since the Unix epoch; `0` when absent.
    pub occurred_at_ms: i64,
    /// Link to the event's detail page, when the feed provides one.
    pub detail_url: Option<String>,
}
