//! Messages for the programs menu: program overview and top active
//! wallets.

use serde::Deserialize;

use crate::convert::{NOT_AVAILABLE, lenient_u64};

use super::{emoji_number, group_int, shorten_address};

/// Program metadata and daily stats for one program address.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDetails {
    #[serde(default)]
    pub entity_name: Option<String>,

    #[serde(default)]
    pub friendly_name: Option<String>,

    /// Daily active users. Absent when the API has no stats yet.
    #[serde(default)]
    pub dau: Option<i64>,

    #[serde(default, rename = "newUsersChange1d")]
    pub new_users_change_1d: Option<i64>,

    #[serde(default, rename = "transactions1d")]
    pub transactions_1d: Option<i64>,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub program_description: Option<String>,
}

impl ProgramDetails {
    /// Best display name for the program: friendly name, then entity
    /// name, then the raw address.
    #[must_use]
    pub fn display_name(&self, address: &str) -> String {
        self.friendly_name
            .clone()
            .or_else(|| self.entity_name.clone())
            .unwrap_or_else(|| address.to_owned())
    }
}

/// One wallet of the top-active-wallets ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveWallet {
    #[serde(default)]
    pub wallet: Option<String>,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub transactions: u64,
}

fn count_or_na(count: Option<i64>) -> String {
    count.map_or_else(|| NOT_AVAILABLE.to_owned(), group_int)
}

/// Builds the program overview message.
#[must_use]
pub fn format_program_details(program: &ProgramDetails) -> String {
    let labels_text = if program.labels.is_empty() {
        "None".to_owned()
    } else {
        program.labels.join(", ")
    };

    format!(
        "📌 *Program Overview*\n\
         \n\
         🏛️ *Entity:* {}\n\
         📛 *Name:* {}\n\
         🏷️ *Labels:* {}\n\
         \n\
         📊 *Stats (24h)*\n\
         👥 Active Users: {}\n\
         🆕 New Users: {}\n\
         🔁 Transactions: {}\n\
         \n\
         📖 *Description:*\n{}",
        program.entity_name.as_deref().unwrap_or(NOT_AVAILABLE),
        program.friendly_name.as_deref().unwrap_or(NOT_AVAILABLE),
        labels_text,
        count_or_na(program.dau),
        count_or_na(program.new_users_change_1d),
        count_or_na(program.transactions_1d),
        program
            .program_description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(NOT_AVAILABLE),
    )
}

/// Builds the top active wallets message: emoji ranks, shortened
/// addresses and grouped transaction counts.
#[must_use]
pub fn format_top_active_wallets(
    program_name: &str,
    days: u32,
    limit: usize,
    wallets: &[ActiveWallet],
) -> String {
    let mut lines = vec![format!(
        "📊 *Top {limit} Active Wallets*\n\
         🧾 *Program:* {program_name}\n\
         📆 *Last {days} Days*"
    )];

    for (rank, entry) in wallets.iter().enumerate() {
        let wallet = entry.wallet.as_deref().unwrap_or(NOT_AVAILABLE);
        lines.push(format!(
            "{} {} — 🔁 *{}*",
            emoji_number(rank + 1),
            shorten_address(wallet),
            group_int(entry.transactions),
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_details_message() {
        let program: ProgramDetails = serde_json::from_value(serde_json::json!({
            "entityName": "Orca",
            "friendlyName": "Orca Whirlpools",
            "dau": 15234,
            "newUsersChange1d": 120,
            "transactions1d": 1234567,
            "labels": ["DEX", "AMM"],
            "logoUrl": "https://example.com/orca.png",
            "programDescription": "Concentrated liquidity AMM."
        }))
        .unwrap();

        let text = format_program_details(&program);
        assert!(text.contains("🏛️ *Entity:* Orca"));
        assert!(text.contains("📛 *Name:* Orca Whirlpools"));
        assert!(text.contains("🏷️ *Labels:* DEX, AMM"));
        assert!(text.contains("👥 Active Users: 15,234"));
        assert!(text.contains("🔁 Transactions: 1,234,567"));
        assert!(text.contains("📖 *Description:*\nConcentrated liquidity AMM."));
    }

    #[test]
    fn test_program_details_missing_stats() {
        let program: ProgramDetails = serde_json::from_value(serde_json::json!({})).unwrap();
        let text = format_program_details(&program);

        assert!(text.contains("🏛️ *Entity:* N/A"));
        assert!(text.contains("🏷️ *Labels:* None"));
        assert!(text.contains("👥 Active Users: N/A"));
        assert!(text.contains("📖 *Description:*\nN/A"));
    }

    #[test]
    fn test_display_name_fallback_chain() {
        let full: ProgramDetails = serde_json::from_value(serde_json::json!({
            "entityName": "Orca",
            "friendlyName": "Orca Whirlpools"
        }))
        .unwrap();
        assert_eq!(full.display_name("addr"), "Orca Whirlpools");

        let entity_only: ProgramDetails =
            serde_json::from_value(serde_json::json!({ "entityName": "Orca" })).unwrap();
        assert_eq!(entity_only.display_name("addr"), "Orca");

        let bare: ProgramDetails = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(bare.display_name("addr"), "addr");
    }

    #[test]
    fn test_top_active_wallets_message() {
        let wallets: Vec<ActiveWallet> = serde_json::from_value(serde_json::json!([
            { "wallet": "6T25g2abcdeF9bbbbbbbbbbbbbbbbbbbbbbbbbbbdeF9", "transactions": 1203 },
            { "wallet": "D5gP12abcdefbbbbbbbbbbbbbbbbbbbbbbbbbbbbA0F8", "transactions": 1045 }
        ]))
        .unwrap();

        let text = format_top_active_wallets("Orca", 7, 5, &wallets);
        assert!(text.starts_with("📊 *Top 5 Active Wallets*"));
        assert!(text.contains("🧾 *Program:* Orca"));
        assert!(text.contains("📆 *Last 7 Days*"));
        assert!(text.contains("1️⃣ 6T25g2...deF9 — 🔁 *1,203*"));
        assert!(text.contains("2️⃣ D5gP12...A0F8 — 🔁 *1,045*"));
    }
}
