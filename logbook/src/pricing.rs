//! Ticket pricing from entry and exit times.
//!
//! Prices are a linear function of the same-day span between two `"HH:MM"`
//! strings: partial hours round up, and an exit before the entry clamps to
//! zero rather than wrapping to the next day.

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

/// Hourly parking rate, in MXN
pub const HOURLY_RATE: u32 = 25;

/// Failure to interpret a time-of-day string
#[derive(Debug, Error)]
#[error("invalid time of day {value:?}")]
pub struct TimeParseError {
    /// The rejected input
    pub value: String,
    /// Parser diagnostic
    #[source]
    source: chrono::ParseError,
}

/// Minutes since midnight for an `"HH:MM"` string
///
/// # Errors
///
/// Returns [`TimeParseError`] when the input is not a valid time of day.
pub fn minutes_since_midnight(value: &str) -> Result<u32, TimeParseError> {
    let time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|source| TimeParseError {
        value: value.to_owned(),
        source,
    })?;
    Ok(time.hour() * 60 + time.minute())
}

fn stay_total(entry_time: &str, exit_time: &str) -> Result<u32, TimeParseError> {
    let entry = minutes_since_midnight(entry_time)?;
    let exit = minutes_since_midnight(exit_time)?;

    // Overnight spans clamp to zero; there is no day wraparound.
    let elapsed = exit.saturating_sub(entry);
    let units = elapsed.div_ceil(60);
    Ok(units * HOURLY_RATE)
}

/// Price for a stay, formatted `"$<total>"`
///
/// Malformed input on either side prices as `"$0"` rather than surfacing
/// the parse failure.
#[must_use]
pub fn ticket_price(entry_time: &str, exit_time: &str) -> String {
    let total = stay_total(entry_time, exit_time).unwrap_or(0);
    format!("${total}")
}
