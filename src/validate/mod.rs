//! Validation of user input collected through the bot's menus.
//!
//! Every prompt in the bot (addresses, day counts, candle resolutions)
//! funnels free text through one of these predicates before anything is
//! sent to the analytics API. They answer yes/no only; the prompt layer
//! owns the retry messaging.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum length of a Solana address (wallet, mint, program, collection).
pub const ADDRESS_MIN_LEN: usize = 42;

/// Maximum length of a Solana address.
pub const ADDRESS_MAX_LEN: usize = 46;

/// Smallest accepted history window in days.
pub const MIN_HISTORY_DAYS: u32 = 1;

/// Largest accepted history window in days.
pub const MAX_HISTORY_DAYS: u32 = 30;

/// Candle resolutions accepted by the OHLCV endpoint.
pub const OHLCV_RESOLUTIONS: [&str; 14] = [
    "1s", "1m", "3m", "5m", "15m", "30m", "1h", "2h", "3h", "4h", "1d", "1w", "1mo", "1y",
];

static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{42,46}$").expect("valid pattern"));

static TIME_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(h|d)$").expect("valid pattern"));

static RESOLUTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(s|m|h|d|w|mo|y)$").expect("valid pattern"));

/// Checks whether the input looks like a Solana address: alphanumeric
/// and 42 to 46 characters long. Wallet, mint, program and collection
/// addresses all share this rule.
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// Checks whether the input is a time range like `1h`, `12h` or `7d`.
#[must_use]
pub fn is_valid_time_range(range: &str) -> bool {
    TIME_RANGE_RE.is_match(range)
}

/// Checks whether the input matches the general resolution shape, e.g.
/// `30m`, `4h`, `1mo`.
#[must_use]
pub fn is_valid_resolution(resolution: &str) -> bool {
    RESOLUTION_RE.is_match(resolution)
}

/// Checks whether the resolution is one the OHLCV endpoint actually
/// serves (a stricter subset of [`is_valid_resolution`]).
#[must_use]
pub fn is_supported_resolution(resolution: &str) -> bool {
    OHLCV_RESOLUTIONS.contains(&resolution)
}

/// Checks whether the input is a positive integer, suitable as a result
/// limit.
#[must_use]
pub fn is_valid_limit(value: &str) -> bool {
    is_digits(value) && value.parse::<u64>().is_ok_and(|n| n > 0)
}

/// Checks whether the input is a day count within the accepted history
/// window (1 to 30).
#[must_use]
pub fn is_valid_days(value: &str) -> bool {
    is_digits(value)
        && value
            .parse::<u32>()
            .is_ok_and(|n| (MIN_HISTORY_DAYS..=MAX_HISTORY_DAYS).contains(&n))
}

/// Digit-only check; `parse` alone would also admit a leading `+`.
fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
