use std::env;

/// Display preferences, consumed by the query builder as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPreferences {
    pub order_by: String,
    pub min_magnitude: String,
}

pub const ORDER_BY_ENV: &str = "QUAKEFEED_ORDER_BY";
pub const MIN_MAGNITUDE_ENV: &str = "QUAKEFEED_MIN_MAGNITUDE";

const DEFAULT_ORDER_BY: &str = "time";
const DEFAULT_MIN_MAGNITUDE: &str = "6";

/// Reads preferences from the environment, falling back to the defaults.
pub fn from_env() -> FeedPreferences {
    resolve(
        env::var(ORDER_BY_ENV).ok(),
        env::var(MIN_MAGNITUDE_ENV).ok(),
    )
}

fn resolve(order_by: Option<String>, min_magnitude: Option<String>) -> FeedPreferences {
    FeedPreferences {
        order_by: non_empty_or(order_by, DEFAULT_ORDER_BY),
        min_magnitude: non_empty_or(min_magnitude, DEFAULT_MIN_MAGNITUDE),
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let prefs = resolve(None, None);
        assert_eq!(prefs.order_by, "time");
        assert_eq!(prefs.min_magnitude, "6");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let prefs = resolve(Some("  ".to_string()), Some(String::new()));
        assert_eq!(prefs.order_by, "time");
        assert_eq!(prefs.min_magnitude, "6");
    }

    #[test]
    fn set_values_pass_through() {
        let prefs = resolve(Some("magnitude".to_string()), Some("5.5".to_string()));
        assert_eq!(prefs.order_by, "magnitude");
        assert_eq!(prefs.min_magnitude, "5.5");
    }
}
