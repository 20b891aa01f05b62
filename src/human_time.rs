//! Serde adapter for intervals in the configuration file: both plain numbers
//! (seconds) and `humantime` strings (e.g., `"2s"`) are accepted. Zero
//! intervals are clamped since they would busy-loop the scheduler.

use std::time::Duration;

pub use humantime_serde::serialize;
use humantime_serde::Serde;
use serde::{Deserialize, Deserializer};

#[derive(serde_derive::Deserialize)]
#[serde(untagged)]
enum Interval {
    Seconds(f64),
    Human(Serde<Duration>),
}

pub fn deserialize<'a, D>(d: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'a>,
{
    let duration = match Interval::deserialize(d)? {
        Interval::Seconds(secs) => Duration::from_secs_f64(secs.max(0.0)),
        Interval::Human(human) => human.into_inner(),
    };
    Ok(validate(duration))
}

fn validate(duration: Duration) -> Duration {
    if duration.is_zero() {
        log::warn!("invalid interval {:?}, must be >= 1s: defaulting to 1s", duration);
        Duration::from_secs(1)
    } else {
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde_derive::Deserialize)]
    struct Wrapper {
        #[serde(with = "crate::human_time")]
        interval: Duration,
    }

    fn parse(json: serde_json::Value) -> Duration {
        serde_json::from_value::<Wrapper>(json).unwrap().interval
    }

    #[test]
    fn accepts_bare_seconds() {
        assert_eq!(parse(serde_json::json!({ "interval": 2 })), Duration::from_secs(2));
        assert_eq!(
            parse(serde_json::json!({ "interval": 0.5 })),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn accepts_humantime_strings() {
        assert_eq!(parse(serde_json::json!({ "interval": "2s" })), Duration::from_secs(2));
        assert_eq!(
            parse(serde_json::json!({ "interval": "1m 30s" })),
            Duration::from_secs(90)
        );
    }

    #[test]
    fn clamps_zero() {
        assert_eq!(parse(serde_json::json!({ "interval": 0 })), Duration::from_secs(1));
    }
}
