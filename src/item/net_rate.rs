use async_trait::async_trait;
use hex_color::HexColor;
use tokio::time::sleep;

use crate::config::AppConfig;
use crate::context::{BarItem, Context};
use crate::error::Result;
use crate::format;
use crate::i3::{I3Item, I3Markup};
use crate::net::dev::DevFile;
use crate::sampler::{RateSampler, Sample};

/// The bar item: drives a [`RateSampler`] on the configured interval and
/// renders each sample into a bar block.
#[derive(Debug, Default)]
pub struct NetRate;

impl NetRate {
    /// The colour of the largest threshold at or below `value`, if any.
    /// Values below every threshold (e.g., a counter reset) get no colour.
    fn threshold_color(cfg: &AppConfig, value: f64) -> Option<HexColor> {
        let mut color = None;
        for threshold in &cfg.thresholds {
            if value >= threshold.bytes() as f64 {
                color = cfg.theme.color(threshold.color());
            } else {
                break;
            }
        }
        color
    }

    /// Render a single rate value: scale it to a unit, format the number, and
    /// apply the value template if one is configured.
    fn format_value(cfg: &AppConfig, value: f64) -> String {
        let (scaled, unit) = format::format_units(value, &cfg.unit, cfg.si_units);
        let number = format::float(scaled, &cfg.value_format());
        match cfg.format_value.as_ref() {
            Some(template) => {
                format::render(template, &[("value", number.as_str()), ("unit", unit.as_str())])
            }
            None => format!("{} {}", number, unit),
        }
    }

    /// A rate value wrapped in a pango span carrying its threshold colour.
    fn value_span(cfg: &AppConfig, value: f64) -> String {
        let text = Self::format_value(cfg, value);
        match Self::threshold_color(cfg, value) {
            Some(color) => format!(r#"<span foreground="{}">{}</span>"#, color, text),
            None => text,
        }
    }

    fn render(cfg: &AppConfig, sample: &Sample) -> I3Item {
        match sample {
            // hiding wins over everything else
            Sample::Data { hide: true, .. } | Sample::NoData { hide: true } => I3Item::empty(),
            // no rates, or rates but no interface to attribute them to
            Sample::NoData { .. } | Sample::Data { interface: None, .. } => {
                I3Item::new(&cfg.format_no_connection)
            }
            Sample::Data {
                interface: Some(interface),
                delta,
                ..
            } => {
                let down = Self::value_span(cfg, delta.down);
                let up = Self::value_span(cfg, delta.up);
                let total = Self::value_span(cfg, delta.total);
                let full_text = format::render(
                    &cfg.format,
                    &[
                        ("interface", interface.as_str()),
                        ("down", down.as_str()),
                        ("up", up.as_str()),
                        ("total", total.as_str()),
                    ],
                );

                I3Item::new(full_text)
                    .short_text(interface)
                    .markup(I3Markup::Pango)
            }
        }
    }
}

#[async_trait(?Send)]
impl BarItem for NetRate {
    async fn start(self: Box<Self>, ctx: Context) -> Result<()> {
        let cfg = ctx.config.clone();
        let mut sampler = RateSampler::new(
            DevFile::new(&cfg.devfile),
            cfg.filter.clone(),
            cfg.hide_if_zero,
        );

        loop {
            let sample = sampler.sample();
            ctx.update_item(Self::render(&cfg, &sample)).await?;
            sleep(cfg.cache_timeout).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::RateDelta;

    fn delta(down: f64, up: f64) -> RateDelta {
        RateDelta {
            down,
            up,
            total: down + up,
        }
    }

    fn data(interface: Option<&str>, delta: RateDelta, hide: bool) -> Sample {
        Sample::Data {
            interface: interface.map(String::from),
            delta,
            hide,
        }
    }

    #[test]
    fn renders_the_default_template() {
        let mut cfg = AppConfig::default();
        cfg.thresholds.clear();

        let item = NetRate::render(&cfg, &data(Some("eth0"), delta(1024.0, 512.0), false));
        assert_eq!(item.full_text(), "eth0:     1.5 KiB/s");
    }

    #[test]
    fn renders_all_placeholders() {
        let mut cfg = AppConfig::default();
        cfg.thresholds.clear();
        cfg.format = "{interface} {down}|{up}|{total}".into();

        let item = NetRate::render(&cfg, &data(Some("eth0"), delta(1024.0, 0.0), false));
        assert_eq!(
            item.full_text(),
            "eth0     1.0 KiB/s|    0.0 B/s|    1.0 KiB/s"
        );
    }

    #[test]
    fn threshold_colours_wrap_values_in_spans() {
        let cfg = AppConfig::default();

        // 2 KiB/s sits between the degraded (1024) and good (1 MiB) thresholds
        let span = NetRate::value_span(&cfg, 2048.0);
        let expected_color = cfg.theme.yellow;
        assert_eq!(
            span,
            format!(r#"<span foreground="{}">    2.0 KiB/s</span>"#, expected_color)
        );
    }

    #[test]
    fn values_below_all_thresholds_are_uncoloured() {
        let cfg = AppConfig::default();
        // negative rate from a counter reset
        assert_eq!(NetRate::threshold_color(&cfg, -100.0), None);
        // zero matches the first threshold
        assert_eq!(NetRate::threshold_color(&cfg, 0.0), Some(cfg.theme.red));
        // above everything
        assert_eq!(
            NetRate::threshold_color(&cfg, 5.0 * 1024.0 * 1024.0),
            Some(cfg.theme.green)
        );
    }

    #[test]
    fn hide_renders_an_empty_block() {
        let cfg = AppConfig::default();
        assert!(NetRate::render(&cfg, &Sample::NoData { hide: true }).is_empty());
        assert!(NetRate::render(&cfg, &data(Some("eth0"), delta(0.0, 0.0), true)).is_empty());
    }

    #[test]
    fn no_connection_text_when_there_is_no_interface() {
        let mut cfg = AppConfig::default();
        cfg.format_no_connection = "no connection".into();

        let item = NetRate::render(&cfg, &Sample::NoData { hide: false });
        assert_eq!(item.full_text(), "no connection");

        let item = NetRate::render(&cfg, &data(None, delta(0.0, 0.0), false));
        assert_eq!(item.full_text(), "no connection");
    }

    #[test]
    fn explicit_value_template_is_used() {
        let mut cfg = AppConfig::default();
        cfg.thresholds.clear();
        cfg.format = "{total}".into();
        cfg.format_value = Some("{value}{unit}".into());

        let item = NetRate::render(&cfg, &data(Some("eth0"), delta(512.0, 0.0), false));
        assert_eq!(item.full_text(), "  512.0B/s");
    }
}
