use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Cumulative byte counters for a single interface, as read from the kernel's
/// counter table. The counters are monotonically non-decreasing but may reset
/// when an interface resets or the machine reboots; that is not corrected for
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCounters {
    pub name: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// A source of counter snapshots. One read returns the counters for all
/// interfaces at an instant, in the order the source lists them.
pub trait CounterSource {
    fn read(&self) -> Result<Vec<InterfaceCounters>>;
}

/// Reads `/proc/net/dev` (or any file in the same format).
#[derive(Debug, Clone)]
pub struct DevFile {
    path: PathBuf,
}

impl DevFile {
    pub fn new(path: impl Into<PathBuf>) -> DevFile {
        DevFile { path: path.into() }
    }
}

impl CounterSource for DevFile {
    fn read(&self) -> Result<Vec<InterfaceCounters>> {
        parse_dev(&fs::read_to_string(&self.path)?)
    }
}

// positions of the byte counters among the numeric fields after the name
const RX_BYTES_FIELD: usize = 0;
const TX_BYTES_FIELD: usize = 8;

/// Parse a `/proc/net/dev` style table: two header lines, then one line per
/// interface of `name:` followed by whitespace-separated numeric fields.
fn parse_dev(table: &str) -> Result<Vec<InterfaceCounters>> {
    let mut counters = vec![];

    for line in table.lines().skip(2) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // the name is colon-terminated; some kernels omit the space after it
        let (name, fields) = match line.split_once(':') {
            Some(pair) => pair,
            None => bail!("malformed counter line: {}", line),
        };

        let fields = fields.split_whitespace().collect::<Vec<_>>();
        if fields.len() <= TX_BYTES_FIELD {
            bail!(
                "expected at least {} counter fields for {}, found {}",
                TX_BYTES_FIELD + 1,
                name,
                fields.len()
            );
        }

        counters.push(InterfaceCounters {
            name: name.trim().to_string(),
            rx_bytes: fields[RX_BYTES_FIELD].parse()?,
            tx_bytes: fields[TX_BYTES_FIELD].parse()?,
        });
    }

    Ok(counters)
}
