//! Shared numeric and parsing helpers.

/// Rounds to the nearest integer, ties to even, and clamps at zero.
///
/// Survey statistics are always non-negative, so the result is returned as `u64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_half_even(value: f64) -> u64 {
    let rounded = value.round_ties_even();
    if rounded <= 0.0 {
        0
    } else {
        rounded as u64
    }
}

/// Computes `round(numerator / denominator * 100)`.
///
/// Returns `None` when the denominator is zero.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(numerator: u64, denominator: u64) -> Option<u64> {
    if denominator == 0 {
        return None;
    }
    Some(round_half_even(numerator as f64 / denominator as f64 * 100.0))
}

/// Computes `round(count / divisor)` with ties to even.
#[allow(clippy::cast_precision_loss)]
pub fn rounded_average(count: u64, divisor: u64) -> Option<u64> {
    if divisor == 0 {
        return None;
    }
    Some(round_half_even(count as f64 / divisor as f64))
}

/// The hour component of a `HH:MM[:SS]` time string, exactly as written.
pub fn hour_label(time_of_day: &str) -> &str {
    time_of_day.split(':').next().unwrap_or(time_of_day)
}

/// Parses the hour component of a `HH:MM[:SS]` time string.
pub fn parse_hour(time_of_day: &str) -> Option<u32> {
    hour_label(time_of_day).trim().parse().ok()
}
