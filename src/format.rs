use num_traits::Float;
use serde_derive::{Deserialize, Serialize};

/// Multiplier prefixes for auto-scaled units, in increasing order of magnitude.
const BINARY_PREFIXES: &[&str] = &["", "Ki", "Mi", "Gi", "Ti", "Pi"];
const SI_PREFIXES: &[&str] = &["", "K", "M", "G", "T", "P"];

/// Scale a value for display, returning the scaled value and its unit label.
///
/// If `unit` already carries a multiplier prefix (e.g., `MB/s`) then that exact
/// unit is pinned: the value is divided by the prefix's multiplier and never
/// rescaled. Otherwise the value is scaled to the largest prefix that keeps it
/// above one, using binary multiples (`KiB`) by default or decimal ones (`KB`)
/// when `si` is set.
pub fn format_units(value: f64, unit: &str, si: bool) -> (f64, String) {
    const PINNED: &[(&str, f64)] = &[
        ("Ki", 1024.0),
        ("Mi", 1048576.0),
        ("Gi", 1073741824.0),
        ("Ti", 1099511627776.0),
        ("Pi", 1125899906842624.0),
        ("K", 1e3),
        ("M", 1e6),
        ("G", 1e9),
        ("T", 1e12),
        ("P", 1e15),
    ];
    for (prefix, multiplier) in PINNED {
        // a prefix alone is not a unit, so require something after it
        if unit.len() > prefix.len() && unit.starts_with(prefix) {
            return (value / multiplier, unit.to_string());
        }
    }

    let (base, prefixes) = if si {
        (1000.0, SI_PREFIXES)
    } else {
        (1024.0, BINARY_PREFIXES)
    };

    let mut scaled = value;
    let mut idx = 0;
    while scaled.abs() >= base && idx + 1 < prefixes.len() {
        scaled /= base;
        idx += 1;
    }

    (scaled, format!("{}{}", prefixes[idx], unit))
}

/// Substitute `{name}` placeholders in a configuration template. Unknown
/// placeholders are left untouched.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}

/// Common, re-usable options for formatting floats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloatFormat {
    /// The character to use for padding.
    pub pad: Option<char>,
    /// How many characters to pad with. If unset, pads to 3 digits before the
    /// decimal point plus the decimal places.
    pub pad_count: Option<usize>,
    /// The precision displayed when formatting the float.
    pub precision: Option<usize>,
}

impl FloatFormat {
    pub fn with_precision(precision: usize) -> FloatFormat {
        FloatFormat {
            pad: Some(' '),
            pad_count: None,
            precision: Some(precision),
        }
    }
}

/// Return the number of digits (before the decimal place) a given number has.
fn num_digits<F: Float>(n: F) -> usize {
    // SAFETY: the input type is constrained to a float, and all f32's fit into an f64
    let n = n.abs().to_f64().unwrap();
    if n < 1.0 {
        1
    } else {
        (n.log10() + 1.).floor() as usize
    }
}

/// Format a float according to the given options.
pub fn float<F: Float>(n: F, fmt: &FloatFormat) -> String {
    // SAFETY: the input type is constrained to a float, and all f32's fit into an f64
    let n = n.to_f64().unwrap();
    if matches!((fmt.pad, fmt.pad_count, fmt.precision), (None, None, None)) {
        return format!("{:3.0}", n);
    }

    let precision = fmt.precision.unwrap_or(0);
    let pad_count = fmt.pad_count.unwrap_or_else(|| {
        if precision > 0 {
            // three digits + decimal separator + precision
            3 + 1 + precision
        } else {
            // three digits only
            3
        }
    });

    let padding = fmt
        .pad
        .map(|c| {
            let s = c.to_string();
            let len = num_digits(n);
            if len >= pad_count {
                "".into()
            } else {
                s.repeat(pad_count - len)
            }
        })
        .unwrap_or("".into());

    format!("{}{:.precision$}", padding, n, precision = precision)
}
