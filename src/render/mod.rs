//! Rendering of analytics API data into Telegram Markdown messages.
//!
//! Each submodule owns the response shapes and message templates for
//! one menu section of the bot. The functions here are shared plumbing:
//! address shortening, rank emojis, digit grouping and splitting long
//! output into Telegram-sized chunks.

pub mod holders;
pub mod nft;
pub mod program;
pub mod token;
pub mod wallet;

use tracing::debug;

/// Budget per outgoing message, kept under Telegram's 4096-char limit.
pub const MAX_MESSAGE_LEN: usize = 4000;

/// Numbered emojis for ranks 1 through 10.
const RANK_EMOJIS: [&str; 10] = ["1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟"];

/// Shortens an address for display: first six and last four characters
/// around an ellipsis (`5B28C3...4Fd9`). Inputs too short to shorten
/// are returned unchanged.
#[must_use]
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_owned();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Returns the numbered emoji for a 1-based rank, or a bold `*n.*`
/// marker past 10.
#[must_use]
pub fn emoji_number(rank: usize) -> String {
    match rank {
        1..=10 => RANK_EMOJIS[rank - 1].to_owned(),
        _ => format!("*{rank}.*"),
    }
}

/// Formats an integer with thousands separators: `1234567` becomes
/// `1,234,567`.
#[must_use]
pub fn group_int(value: impl Into<i128>) -> String {
    let value = value.into();
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    let lead = digits.len() % 3;
    if lead > 0 {
        grouped.push_str(&digits[..lead]);
    }
    for (i, chunk) in digits.as_bytes()[lead..].chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            grouped.push(',');
        }
        // Chunks of ASCII digits are always valid UTF-8.
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }

    grouped
}

/// Formats a float with two decimals and thousands separators on the
/// integer part: `1234.5` becomes `1,234.50`.
#[must_use]
pub fn group_float(value: f64) -> String {
    let plain = format!("{value:.2}");
    let Some((int_part, frac_part)) = plain.split_once('.') else {
        return plain;
    };

    // Values past i64 range are left ungrouped rather than mangled.
    let Ok(digits) = int_part.parse::<i64>() else {
        return plain;
    };

    let mut grouped = group_int(digits);
    // Keep the sign of negative zero ("-0.25" parses its int part to 0).
    if int_part.starts_with('-') && !grouped.starts_with('-') {
        grouped.insert(0, '-');
    }

    format!("{grouped}.{frac_part}")
}

/// Splits text into chunks that fit [`MAX_MESSAGE_LEN`], cutting at the
/// last newline inside the budget so entries stay whole. A single line
/// longer than the budget is hard-cut at a character boundary. Leading
/// whitespace of each remainder is dropped.
#[must_use]
pub fn split_message(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.len() > MAX_MESSAGE_LEN {
        // The budget may land mid-character; back off to a boundary
        // before searching for a newline to cut at.
        let window = &rest[..floor_char_boundary(rest, MAX_MESSAGE_LEN)];
        let cut = window.rfind('\n').unwrap_or(window.len());
        chunks.push(rest[..cut].to_owned());
        rest = rest[cut..].trim_start();
    }
    chunks.push(rest.to_owned());

    if chunks.len() > 1 {
        debug!("message split into {} chunks", chunks.len());
    }

    chunks
}

/// Largest index `<= at` that sits on a char boundary of `s`.
fn floor_char_boundary(s: &str, at: usize) -> usize {
    let mut i = at;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
