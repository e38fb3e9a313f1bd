//! Messages for the token analysis menu: full token info and OHLCV
//! candle data.

use serde::Deserialize;
use serde_json::Value;

use crate::convert::{NOT_AVAILABLE, format_number, lenient_f64, lenient_u64, timestamp_label};

/// How many candles the OHLCV message lists before cutting off.
pub const MAX_OHLCV_ROWS: usize = 10;

const DIVIDER: &str = "────────────────────────────";

fn zero() -> Value {
    Value::from(0)
}

/// Token metadata and market data for one mint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub mint_address: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,

    #[serde(default, rename = "price1d", deserialize_with = "lenient_f64")]
    pub price_1d: f64,

    #[serde(default, rename = "price7d", deserialize_with = "lenient_f64")]
    pub price_7d: f64,

    #[serde(default)]
    pub decimal: Option<u32>,

    #[serde(default)]
    pub verified: bool,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub subcategory: Option<String>,

    /// Unix timestamp of the last data refresh.
    #[serde(default, rename = "updatetime")]
    pub update_time: Option<i64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_supply: f64,

    /// Kept as raw JSON: compact formatting decides between a number,
    /// a numeric string and the N/A sentinel.
    #[serde(default = "zero")]
    pub market_cap: Value,

    #[serde(default = "zero", rename = "tokenAmountVolume24h")]
    pub token_amount_volume_24h: Value,

    #[serde(default = "zero", rename = "usdValueVolume24h")]
    pub usd_value_volume_24h: Value,

    #[serde(default)]
    pub logo_url: Option<String>,
}

/// One OHLCV candle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OhlcvCandle {
    /// Candle open time, Unix seconds.
    pub time: i64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub open: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub high: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub low: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub close: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub volume: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub volume_usd: f64,

    /// Number of trades aggregated into the candle.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub count: u64,
}

/// Builds the full token info message.
#[must_use]
pub fn format_token_info(token: &TokenInfo) -> String {
    let last_updated = token
        .update_time
        .map_or_else(|| NOT_AVAILABLE.to_owned(), timestamp_label);
    let decimals = token
        .decimal
        .map_or_else(|| NOT_AVAILABLE.to_owned(), |d| d.to_string());

    format!(
        "📄 *Full Token Info*\n\
         🔘 *Symbol:* {symbol}\n\
         🏷️ *Name:* {name}\n\
         🔑 *Mint:* `{mint}`\n\
         \n\
         💵 *Price Info*\n\
         💰 *Current Price:* ${price:.4}\n\
         📅 *1d Ago:* ${price_1d:.4}\n\
         🗓️ *7d Ago:* ${price_7d:.4}\n\
         \n\
         🔍 *Details*\n\
         🧬 *Decimals:* {decimals}\n\
         ✅ *Verified:* {verified}\n\
         📂 *Category:* {category}\n\
         📁 *Subcategory:* {subcategory}\n\
         \n\
         ⏱️ *Last Updated:*\n\
         {last_updated}\n\
         \n\
         📦 *Supply & Market*\n\
         📦 *Supply:* {supply:.4}\n\
         💰 *Market Cap:* ${market_cap}\n\
         \n\
         📊 *24h Volume*\n\
         🔄 *Token:* {volume_token}\n\
         💸 *USD:* ${volume_usd}",
        symbol = token.symbol.as_deref().unwrap_or(NOT_AVAILABLE),
        name = token.name.as_deref().unwrap_or(NOT_AVAILABLE),
        mint = token.mint_address.as_deref().unwrap_or(NOT_AVAILABLE),
        price = token.price,
        price_1d = token.price_1d,
        price_7d = token.price_7d,
        verified = if token.verified { "✅" } else { "❌" },
        category = token.category.as_deref().unwrap_or(NOT_AVAILABLE),
        subcategory = token.subcategory.as_deref().filter(|s| !s.is_empty()).unwrap_or("—"),
        supply = token.current_supply,
        market_cap = format_number(&token.market_cap),
        volume_token = format_number(&token.token_amount_volume_24h),
        volume_usd = format_number(&token.usd_value_volume_24h),
    )
}

/// Builds the OHLCV message: a header with resolution and date range,
/// then the first [`MAX_OHLCV_ROWS`] candles.
#[must_use]
pub fn format_ohlcv(
    resolution: &str,
    start_date: &str,
    end_date: &str,
    candles: &[OhlcvCandle],
) -> String {
    let mut out = format!(
        "📈 *Token OHLCV Data* ({resolution} candles)\n\
         🗓️ *Range:* {start_date} → {end_date}"
    );

    for candle in candles.iter().take(MAX_OHLCV_ROWS) {
        out.push_str(&format!(
            "\n🕒 *Time:* {}\n\
             🔓 Open: {}\n\
             📈 High: {}\n\
             📉 Low: {}\n\
             🔒 Close: {}\n\
             📦 Volume: {}\n\
             💵 Volume (USD): {}\n\
             🧾 Count: {}\n\
             {DIVIDER}",
            timestamp_label(candle.time),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume,
            candle.volume_usd,
            candle.count,
        ));
    }

    out
}
