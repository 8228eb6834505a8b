use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Parse a timeout such as "10s", "2.5s" or "500ms".
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();

    // "ms" first: "500ms" also ends with "s"
    let (number, millis_per_unit) = if let Some(n) = s.strip_suffix("ms") {
        (n, 1.0)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1_000.0)
    } else {
        bail!("Expected a duration ending in 's' or 'ms': {}", s)
    };

    let value: f64 = number
        .trim()
        .parse()
        .with_context(|| format!("Not a number: {}", s))?;
    if !value.is_finite() || value < 0.0 {
        bail!("Duration must be a non-negative number: {}", s)
    }

    Ok(Duration::from_secs_f64(value * millis_per_unit / 1_000.0))
}

/// Render a run time as "850ms" or "1.25s".
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_secs(1) {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
