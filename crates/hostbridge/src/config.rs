//! Startup configuration for the embedded application

use hostbridge_core::{Clock, Timestamp};
use serde::{Deserialize, Serialize};

/// Initialization value the embedded application is constructed with.
///
/// Consumed once at process start; the `now` field holds the formatted
/// timestamp at that moment. Later time reads go through the `getNow`
/// channel and are sampled fresh, so they need not match this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Formatted timestamp at startup
    pub now: Timestamp,
}

impl AppConfig {
    /// Sample `clock` for the startup timestamp
    pub fn at_startup(clock: &dyn Clock) -> Self {
        Self {
            now: clock.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use hostbridge_core::{FixedClock, SystemClock};

    #[test]
    fn serializes_under_the_now_key() {
        let dt = Local.with_ymd_and_hms(2026, 8, 30, 14, 3, 7).unwrap();
        let config = AppConfig::at_startup(&FixedClock(dt));

        let json = serde_json::to_value(&config).unwrap();
        let stamp = json.get("now").and_then(|v| v.as_str()).unwrap();
        assert_eq!(stamp, config.now.as_str());
    }

    #[test]
    fn startup_timestamp_is_valid() {
        let config = AppConfig::at_startup(&SystemClock);
        assert!(config.now.parse().is_ok());
    }
}
