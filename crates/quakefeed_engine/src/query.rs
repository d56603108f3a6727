use url::Url;

use crate::types::{FailureKind, FetchError};

/// Default feed endpoint (USGS fdsnws event service).
pub const FEED_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Fixed number of events requested per load cycle.
pub const DEFAULT_LIMIT: u32 = 10;

/// Builder for one feed request URL.
///
/// `order_by` and `min_magnitude` are opaque preference strings supplied by
/// the caller; the builder only positions them as query parameters.
#[derive(Debug, Clone)]
pub struct FeedQuery {
    base: String,
    order_by: String,
    min_magnitude: String,
    limit: u32,
}

impl FeedQuery {
    pub fn new(order_by: impl Into<String>, min_magnitude: impl Into<String>) -> Self {
        Self {
            base: FEED_URL.to_string(),
            order_by: order_by.into(),
            min_magnitude: min_magnitude.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Overrides the base endpoint; used by tests against a local server.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn build(&self) -> Result<String, FetchError> {
        let mut url = Url::parse(&self.base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("format", "geojson")
            .append_pair("eventtype", "earthquake")
            .append_pair("orderby", &self.order_by)
            .append_pair("minmag", &self.min_magnitude)
            .append_pair("limit", &self.limit.to_string());
        Ok(url.to_string())
    }
}
