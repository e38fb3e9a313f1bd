//! Messages for the wallet tracking menu: token balances, PnL and the
//! combined portfolio summary.

use serde::Deserialize;

use crate::convert::{NOT_AVAILABLE, lenient_f64, lenient_u64};

use super::{group_float, split_message};

/// A wallet's token balances as returned by the analytics API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalances {
    #[serde(default)]
    pub owner_address: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_token_value_usd: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub staked_sol_balance_usd: f64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_token_count: u64,

    #[serde(default, rename = "data")]
    pub tokens: Vec<TokenBalance>,
}

/// One token position inside a wallet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub mint_address: Option<String>,

    /// 24h price change, percent.
    #[serde(default, rename = "priceUsd1dChange", deserialize_with = "lenient_f64")]
    pub price_usd_1d_change: f64,

    /// 24h value change, USD.
    #[serde(default, rename = "valueUsd1dChange", deserialize_with = "lenient_f64")]
    pub value_usd_1d_change: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub value_usd: f64,

    #[serde(default)]
    pub verified: bool,
}

/// Wallet PnL report: totals plus per-token trading metrics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlSummary {
    #[serde(default)]
    pub summary: PnlTotals,

    #[serde(default)]
    pub token_metrics: Vec<TokenPnl>,
}

/// Aggregated PnL figures for the requested window.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlTotals {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub realized_pnl_usd: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub unrealized_pnl_usd: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub trades_volume_usd: f64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub trades_count: u64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_trade_usd: f64,

    /// Fraction of winning trades, 0.0 to 1.0.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub win_rate: f64,
}

/// Trading metrics for one token.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPnl {
    #[serde(default)]
    pub token_symbol: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub realized_pnl_usd: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub unrealized_pnl_usd: f64,

    #[serde(default)]
    pub buys: TradeSide,

    #[serde(default)]
    pub sells: TradeSide,
}

/// One side (buy or sell) of a token's trading activity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSide {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub volume_usd: f64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub transaction_count: u64,
}

/// Builds the wallet token summary: totals, then one block per token
/// with a 🟢/🔴/⚪️ indicator for the 24h value change. Split into
/// Telegram-sized chunks.
#[must_use]
pub fn format_token_balances(balances: &TokenBalances) -> Vec<String> {
    let mut out = format!(
        "🧾 *Wallet Token Summary*\n\
         👛 Wallet Address: `{}`\n\
         💰 Total Token Value (USD): ${}\n\
         🔒 Staked SOL Value (USD): ${}\n\
         🪙 Number of Tokens Held: {}\n\
         📊 *Tokens List:*",
        balances.owner_address.as_deref().unwrap_or(NOT_AVAILABLE),
        group_float(balances.total_token_value_usd),
        group_float(balances.staked_sol_balance_usd),
        balances.total_token_count,
    );

    for token in &balances.tokens {
        let change_emoji = if token.value_usd_1d_change > 0.0 {
            "🟢"
        } else if token.value_usd_1d_change < 0.0 {
            "🔴"
        } else {
            "⚪️"
        };

        out.push_str(&format!(
            "\n\n{change_emoji} *{}* ({})\n\
             🔗 Mint: `{}`\n\
             📈 24h Price Change: {:.2}%\n\
             💸 24h Value Change: ${:.2}\n\
             📦 Amount: {}\n\
             💵 Value: ${}\n\
             ✔️ Verified: {}",
            token.symbol.as_deref().unwrap_or(NOT_AVAILABLE),
            token.name.as_deref().unwrap_or(NOT_AVAILABLE),
            token.mint_address.as_deref().unwrap_or(NOT_AVAILABLE),
            token.price_usd_1d_change,
            token.value_usd_1d_change,
            token.amount,
            group_float(token.value_usd),
            if token.verified { "✅" } else { "❌" },
        ));
    }

    split_message(&out)
}

/// Builds the PnL summary message for a wallet over a day window,
/// split into Telegram-sized chunks.
#[must_use]
pub fn format_pnl_summary(wallet_address: &str, days: u32, pnl: &PnlSummary) -> Vec<String> {
    let totals = &pnl.summary;
    let mut out = format!(
        "💥 *PnL Summary ({days}d)*\n\
         👛 Wallet: `{wallet_address}`\n\
         💵 *Realized PnL:* ${:.2}\n\
         📉 *Unrealized PnL:* ${:.2}\n\
         🔁 *Trade Volume:* ${:.2}\n\
         📊 *Total Trades:* {}\n\
         📦 *Avg. Trade Size:* ${:.2}\n\
         🏆 *Win Rate:* {:.2}%",
        totals.realized_pnl_usd,
        totals.unrealized_pnl_usd,
        totals.trades_volume_usd,
        totals.trades_count,
        totals.average_trade_usd,
        totals.win_rate * 100.0,
    );

    if !pnl.token_metrics.is_empty() {
        out.push_str("\n\n📌 *Token Metrics:*");
        for token in &pnl.token_metrics {
            out.push_str(&format!(
                "\n\n🪙 *{}*\n\
                 💰 Realized: ${:.2}\n\
                 📉 Unrealized: ${:.2}\n\
                 🛒 Buys: ${:.2} | {} txs\n\
                 🏷️ Sells: ${:.2} | {} txs",
                token.token_symbol.as_deref().unwrap_or(NOT_AVAILABLE),
                token.realized_pnl_usd,
                token.unrealized_pnl_usd,
                token.buys.volume_usd,
                token.buys.transaction_count,
                token.sells.volume_usd,
                token.sells.transaction_count,
            ));
        }
    }

    split_message(&out)
}

/// Builds the combined portfolio summary from the token and NFT USD
/// totals.
#[must_use]
pub fn format_portfolio_summary(wallet_address: &str, token_usd: f64, nft_usd: f64) -> String {
    format!(
        "📊 *Portfolio Summary*\n\
         👛 Wallet: `{wallet_address}`\n\
         💼 *Token Value:* ${}\n\
         🎨 *NFT Value:* ${}\n\
         🧾 *Total Portfolio:* 💵 ${}",
        group_float(token_usd),
        group_float(nft_usd),
        group_float(token_usd + nft_usd),
    )
}
