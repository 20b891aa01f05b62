mod parse;

use std::path::PathBuf;
use std::time::Duration;

use bytesize::ByteSize;
use serde_derive::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::Result;
use crate::format::FloatFormat;
use crate::net::filter::InterfaceFilter;
use crate::theme::Theme;

/// One colour threshold: the colour tag applies to rates at or above `bytes`
/// per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Threshold(ByteSize, String);

impl Threshold {
    pub fn new(bytes: u64, color: impl AsRef<str>) -> Threshold {
        Threshold(ByteSize(bytes), color.as_ref().to_string())
    }

    pub fn bytes(&self) -> u64 {
        self.0.as_u64()
    }

    pub fn color(&self) -> &str {
        &self.1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which interfaces take part in sampling (`all_interfaces`, `interfaces`,
    /// `interfaces_blacklist`).
    #[serde(flatten)]
    pub filter: InterfaceFilter,

    /// How often to sample, in seconds (or a humantime string).
    #[serde(with = "crate::human_time", default = "AppConfig::default_cache_timeout")]
    pub cache_timeout: Duration,

    /// Location of the counter table to read.
    #[serde(default = "AppConfig::default_devfile")]
    pub devfile: PathBuf,

    /// Output template. Placeholders: `{interface}`, `{down}`, `{up}`, `{total}`.
    #[serde(default = "AppConfig::default_format")]
    pub format: String,

    /// Shown when no data has been transmitted since the start.
    #[serde(default)]
    pub format_no_connection: String,

    /// Template for each rate value. Placeholders: `{value}`, `{unit}`.
    #[serde(default)]
    pub format_value: Option<String>,

    /// Hide the block entirely when the rate is zero.
    #[serde(default)]
    pub hide_if_zero: bool,

    /// Obsolete: decimal places for rate values. Ignored when `format_value`
    /// is set.
    #[serde(default)]
    pub precision: Option<usize>,

    /// Use SI (decimal) unit multiples instead of binary ones.
    #[serde(default)]
    pub si_units: bool,

    /// Ordered `(bytes per second, colour tag)` pairs.
    #[serde(default = "AppConfig::default_thresholds")]
    pub thresholds: Vec<Threshold>,

    /// Unit to display. A unit with a multiplier prefix (e.g., `MB/s`) is
    /// pinned and never rescaled.
    #[serde(default = "AppConfig::default_unit")]
    pub unit: String,

    /// Specify the colours of the theme.
    #[serde(default)]
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            filter: InterfaceFilter::default(),
            cache_timeout: Self::default_cache_timeout(),
            devfile: Self::default_devfile(),
            format: Self::default_format(),
            format_no_connection: String::new(),
            format_value: None,
            hide_if_zero: false,
            precision: None,
            si_units: false,
            thresholds: Self::default_thresholds(),
            unit: Self::default_unit(),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    pub fn read(args: &Cli) -> Result<AppConfig> {
        let mut cfg = parse::parse(args)?;
        cfg.validate();
        Ok(cfg)
    }

    /// Post-parse fixups.
    fn validate(&mut self) {
        if self.format_value.is_some() && self.precision.is_some() {
            // non-fatal: the explicit value format wins
            log::warn!("both format_value and precision are set, precision will be ignored");
        }

        // threshold lookup scans in ascending order
        self.thresholds.sort_by_key(Threshold::bytes);
    }

    /// How to format a rate value: the precision only applies when no explicit
    /// `format_value` template was given.
    pub fn value_format(&self) -> FloatFormat {
        let precision = match self.format_value {
            Some(_) => 1,
            None => self.precision.unwrap_or(1),
        };
        FloatFormat::with_precision(precision)
    }

    fn default_cache_timeout() -> Duration {
        Duration::from_secs(2)
    }

    fn default_devfile() -> PathBuf {
        PathBuf::from("/proc/net/dev")
    }

    fn default_format() -> String {
        "{interface}: {total}".into()
    }

    fn default_thresholds() -> Vec<Threshold> {
        vec![
            Threshold::new(0, "bad"),
            Threshold::new(1024, "degraded"),
            Threshold::new(1024 * 1024, "good"),
        ]
    }

    fn default_unit() -> String {
        "B/s".into()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_config_has_sane_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.cache_timeout, Duration::from_secs(2));
        assert_eq!(cfg.devfile, PathBuf::from("/proc/net/dev"));
        assert_eq!(cfg.format, "{interface}: {total}");
        assert_eq!(cfg.format_no_connection, "");
        assert_eq!(cfg.unit, "B/s");
        assert!(!cfg.hide_if_zero);
        assert!(!cfg.si_units);
        assert!(cfg.filter.all_interfaces);
        assert!(cfg.filter.interfaces_blacklist.contains("lo"));
        assert_eq!(cfg.thresholds.len(), 3);
    }

    #[test]
    fn thresholds_parse_as_pairs() {
        let cfg: AppConfig = serde_json::from_value(json!({
            "thresholds": [[0, "bad"], [1024, "degraded"], [1048576, "good"]],
        }))
        .unwrap();
        assert_eq!(cfg.thresholds[1].bytes(), 1024);
        assert_eq!(cfg.thresholds[1].color(), "degraded");
    }

    #[test]
    fn thresholds_are_sorted_on_validate() {
        let mut cfg: AppConfig = serde_json::from_value(json!({
            "thresholds": [[1024, "degraded"], [0, "bad"]],
        }))
        .unwrap();
        cfg.validate();
        assert_eq!(cfg.thresholds[0].bytes(), 0);
        assert_eq!(cfg.thresholds[1].bytes(), 1024);
    }

    #[test]
    fn filter_options_are_flattened() {
        let cfg: AppConfig = serde_json::from_value(json!({
            "all_interfaces": false,
            "interfaces": "eth0,wlan0",
        }))
        .unwrap();
        assert!(cfg.filter.accepts("eth0"));
        assert!(!cfg.filter.accepts("eth1"));
    }

    #[test]
    fn explicit_format_value_ignores_precision() {
        let cfg: AppConfig = serde_json::from_value(json!({
            "format_value": "{value} {unit}",
            "precision": 3,
        }))
        .unwrap();
        assert_eq!(cfg.value_format().precision, Some(1));

        let cfg: AppConfig = serde_json::from_value(json!({ "precision": 3 })).unwrap();
        assert_eq!(cfg.value_format().precision, Some(3));
    }
}
