//! The rate sampling state machine: reads cumulative byte counters, computes
//! per-interface deltas against the previous snapshot, and picks the most
//! active interface to report.

use std::time::Instant;

use indexmap::IndexMap;

use crate::net::dev::{CounterSource, InterfaceCounters};
use crate::net::filter::InterfaceFilter;

/// Transfer rates in bytes per second. May be negative if a counter decreased
/// (interface reset); that is reported as-is, not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateDelta {
    pub down: f64,
    pub up: f64,
    pub total: f64,
}

/// The outcome of one sampling pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// Rates were computed this cycle. `interface` is `None` when the selected
    /// rate was zero and no interface has ever been reported.
    Data {
        interface: Option<String>,
        delta: RateDelta,
        hide: bool,
    },
    /// The counters could not be read, pairing with the previous snapshot was
    /// impossible, no time elapsed, or no interface was eligible.
    NoData { hide: bool },
}

/// Owns the previous-snapshot state and computes one [`Sample`] per call.
///
/// Deltas are computed by pairing the previous and current snapshots by
/// position, not by name. If the set of interfaces changes between two samples
/// the lengths differ and that cycle reports no data; a same-length reorder is
/// silently cross-paired. Positional pairing is intentional; switching to
/// name-keyed pairing would change which interface gets selected.
///
/// Not safe for concurrent use: each call mutates the stored snapshot, its
/// timestamp and the last reported interface.
pub struct RateSampler<S> {
    source: S,
    filter: InterfaceFilter,
    hide_if_zero: bool,
    last_counters: Option<Vec<InterfaceCounters>>,
    last_time: Instant,
    last_interface: Option<String>,
}

impl<S: CounterSource> RateSampler<S> {
    /// Create a sampler, immediately taking a baseline snapshot so the first
    /// real sample has something to diff against.
    pub fn new(source: S, filter: InterfaceFilter, hide_if_zero: bool) -> RateSampler<S> {
        Self::with_baseline(source, filter, hide_if_zero, Instant::now())
    }

    fn with_baseline(
        source: S,
        filter: InterfaceFilter,
        hide_if_zero: bool,
        now: Instant,
    ) -> RateSampler<S> {
        let last_counters = match source.read() {
            Ok(counters) => Some(apply_filter(&filter, counters)),
            Err(e) => {
                log::warn!("failed to read baseline counters: {}", e);
                None
            }
        };

        RateSampler {
            source,
            filter,
            hide_if_zero,
            last_counters,
            last_time: now,
            last_interface: None,
        }
    }

    pub fn sample(&mut self) -> Sample {
        self.sample_at(Instant::now())
    }

    /// Take one sample at the given time. `now` is expected to be at or after
    /// the previous sample's time.
    pub fn sample_at(&mut self, now: Instant) -> Sample {
        let no_data = Sample::NoData {
            hide: self.hide_if_zero,
        };

        // a failed read leaves all state untouched, so the next successful
        // sample diffs against the snapshot taken before the failure
        let current = match self.source.read() {
            Ok(counters) => apply_filter(&self.filter, counters),
            Err(e) => {
                log::warn!("failed to read counters: {}", e);
                return no_data;
            }
        };

        let elapsed = now.duration_since(self.last_time).as_secs_f64();
        let deltas = match &self.last_counters {
            // pairing is positional, so it is only possible when the previous
            // and current snapshots have the same length
            Some(old) if old.len() == current.len() && elapsed > 0.0 => old
                .iter()
                .zip(current.iter())
                .map(|(old, new)| {
                    let down = (new.rx_bytes as f64 - old.rx_bytes as f64) / elapsed;
                    let up = (new.tx_bytes as f64 - old.tx_bytes as f64) / elapsed;
                    let delta = RateDelta {
                        down,
                        up,
                        total: up + down,
                    };
                    (new.name.clone(), delta)
                })
                .collect::<IndexMap<_, _>>(),
            // no usable baseline: advance the snapshot so the next cycle
            // resynchronises, and report nothing for this one
            _ => {
                self.last_counters = Some(current);
                self.last_time = now;
                return no_data;
            }
        };

        self.last_counters = Some(current);
        self.last_time = now;

        // the interface with the maximum total rate; ties keep the first one
        // in source order
        let selected = deltas
            .iter()
            .fold(None::<(&String, &RateDelta)>, |acc, (name, delta)| {
                match acc {
                    Some((_, best)) if best.total >= delta.total => acc,
                    _ => Some((name, delta)),
                }
            });

        let (name, delta) = match selected {
            Some(pair) => pair,
            // nothing eligible after filtering
            None => return no_data,
        };

        if delta.total == 0.0 {
            // no traffic: fall back to the last reported interface's name, but
            // keep the zero delta computed for the interface selected above
            return Sample::Data {
                interface: self.last_interface.clone(),
                delta: *delta,
                hide: self.hide_if_zero,
            };
        }

        let (name, delta) = (name.clone(), *delta);
        self.last_interface = Some(name.clone());
        Sample::Data {
            interface: Some(name),
            delta,
            hide: false,
        }
    }
}

fn apply_filter(
    filter: &InterfaceFilter,
    counters: Vec<InterfaceCounters>,
) -> Vec<InterfaceCounters> {
    counters
        .into_iter()
        .filter(|c| filter.accepts(&c.name))
        .collect()
}
