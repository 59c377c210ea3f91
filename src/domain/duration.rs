use super::error::InputError;
use chrono::Duration;

/// Parse a duration expression like "1h30m", "45m", "1.5h" or "90s".
///
/// Units: `h`, `m`, `s`, `ms`. Groups can be combined in any order. A bare
/// `0` is accepted; negative values and numbers without a unit are not.
pub fn parse_duration(input: &str) -> Result<Duration, InputError> {
    let s = input.trim();
    let invalid = || InputError::InvalidDuration(s.to_string());

    if s.is_empty() {
        return Err(invalid());
    }
    if s == "0" {
        return Ok(Duration::zero());
    }

    let mut total_ms: f64 = 0.0;
    let mut rest = s;

    while !rest.is_empty() {
        let num_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_len == 0 {
            return Err(invalid());
        }
        let value: f64 = rest[..num_len].parse().map_err(|_| invalid())?;
        rest = &rest[num_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit_ms = match &rest[..unit_len] {
            "h" => 3_600_000.0,
            "m" => 60_000.0,
            "s" => 1_000.0,
            "ms" => 1.0,
            _ => return Err(invalid()),
        };
        rest = &rest[unit_len..];

        total_ms += value * unit_ms;
    }

    if !total_ms.is_finite() || total_ms > i64::MAX as f64 / 2.0 {
        return Err(invalid());
    }

    Ok(Duration::milliseconds(total_ms.round() as i64))
}

/// Format a duration as "1h29m59s" (leading zero units omitted).
/// A partial second counts as a whole one, so only zero shows "0s".
pub fn format_remaining(duration: Duration) -> String {
    let total_ms = duration.num_milliseconds().max(0);
    let total_secs = (total_ms + 999) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
