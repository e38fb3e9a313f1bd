//! Messages for the top token holders menu, with typed sort
//! parameters.

use std::fmt;

use serde::Deserialize;

use crate::convert::{NOT_AVAILABLE, lenient_f64, lenient_u64};

/// Fields the holders endpoint can sort by. The bot's sort keyboard
/// shows these exact names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderSort {
    Rank,
    OwnerName,
    OwnerAddress,
    ValueUsd,
    Balance,
    SupplyHeld,
}

impl HolderSort {
    /// Parses a sort field from keyboard button text.
    ///
    /// Returns `None` if the text is not a valid sort field.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "rank" => Some(Self::Rank),
            "ownerName" => Some(Self::OwnerName),
            "ownerAddress" => Some(Self::OwnerAddress),
            "valueUsd" => Some(Self::ValueUsd),
            "balance" => Some(Self::Balance),
            "percentageOfSupplyHeld" => Some(Self::SupplyHeld),
            _ => None,
        }
    }

    /// The field name as the analytics API spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::OwnerName => "ownerName",
            Self::OwnerAddress => "ownerAddress",
            Self::ValueUsd => "valueUsd",
            Self::Balance => "balance",
            Self::SupplyHeld => "percentageOfSupplyHeld",
        }
    }
}

impl fmt::Display for HolderSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for the holders endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses a sort order, case-insensitively.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the top-holders ranking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolder {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub rank: u64,

    #[serde(default)]
    pub owner_name: Option<String>,

    #[serde(default)]
    pub owner_address: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub balance: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub value_usd: f64,

    /// Fraction of total supply, 0.0 to 1.0.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub percentage_of_supply_held: f64,

    #[serde(default)]
    pub token_symbol: Option<String>,
}

/// Builds the top token holders message.
#[must_use]
pub fn format_top_holders(
    limit: usize,
    sort: HolderSort,
    order: SortOrder,
    holders: &[TokenHolder],
) -> String {
    let mut out = format!(
        "📋 *Top {limit} Token Holders* (Sorted by *{sort}*, `{}`):",
        order.as_str().to_uppercase()
    );

    for holder in holders {
        out.push_str(&format!(
            "\n🏅 *Rank:* {}\n\
             👤 *Owner:* {} (`{}`)\n\
             📦 *Balance:* {}\n\
             💵 *Value (USD):* ${:.2}\n\
             📈 *Supply Held:* {:.2}%\n\
             🔘 *Token Symbol:* {}",
            holder.rank,
            holder.owner_name.as_deref().unwrap_or(NOT_AVAILABLE),
            holder.owner_address.as_deref().unwrap_or(NOT_AVAILABLE),
            holder.balance,
            holder.value_usd,
            holder.percentage_of_supply_held * 100.0,
            holder.token_symbol.as_deref().unwrap_or(NOT_AVAILABLE),
        ));
    }

    out
}
