//! Messages for the NFT menu: collection owners and wallet NFT
//! portfolios.

use serde::Deserialize;

use crate::convert::{NOT_AVAILABLE, lenient_f64, lenient_u64};

use super::{emoji_number, group_float, shorten_address, split_message};

/// How many owners the collection-owners message lists.
pub const TOP_OWNERS_SHOWN: usize = 10;

/// One owner entry of an NFT collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionOwner {
    /// Owner wallet address.
    #[serde(default)]
    pub owner: Option<String>,

    /// Number of NFTs of the collection this wallet holds.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub amount: u64,
}

/// A wallet's NFT portfolio as returned by the analytics API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftPortfolio {
    #[serde(default)]
    pub owner_address: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_sol: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_usd: f64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_nft_collection_count: u64,

    /// Per-collection breakdown.
    #[serde(default, rename = "data")]
    pub collections: Vec<NftCollection>,
}

/// One NFT collection held by a wallet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftCollection {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub collection_address: Option<String>,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_items: u64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub value_sol: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub value_usd: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_sol: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_usd: f64,
}

/// Builds the "top owners" message for an NFT collection: up to
/// [`TOP_OWNERS_SHOWN`] owners with rank emojis and shortened
/// addresses, split into Telegram-sized chunks.
#[must_use]
pub fn format_collection_owners(
    collection_address: &str,
    owners: &[CollectionOwner],
) -> Vec<String> {
    let mut lines = vec![format!(
        "📦 *Top Owners of:* {}\n",
        shorten_address(collection_address)
    )];

    for (rank, item) in owners.iter().take(TOP_OWNERS_SHOWN).enumerate() {
        let owner = item.owner.as_deref().unwrap_or(NOT_AVAILABLE);
        lines.push(format!(
            "{}\n👤 *Owner:* {}\n🎁 *NFTs:* {}\n",
            emoji_number(rank + 1),
            shorten_address(owner),
            item.amount
        ));
    }

    split_message(&lines.join("\n"))
}

/// Builds the NFT portfolio message: wallet totals followed by the
/// per-collection breakdown.
#[must_use]
pub fn format_nft_portfolio(portfolio: &NftPortfolio) -> String {
    let mut out = format!(
        "💥 *NFT Portfolio*\n\
         👛 *Wallet:* {}\n\
         🪙 *Total SOL Value:* {:.2}\n\
         💵 *Total USD Value:* ${}\n\
         📚 *NFT Collections:* {}",
        portfolio.owner_address.as_deref().unwrap_or(NOT_AVAILABLE),
        portfolio.total_sol,
        group_float(portfolio.total_usd),
        portfolio.total_nft_collection_count,
    );

    if portfolio.collections.is_empty() {
        out.push_str("\n\n⚠️ No NFT collections found.");
        return out;
    }

    out.push_str("\n\n🧾 *Collections:*");
    for collection in &portfolio.collections {
        out.push_str(&format!(
            "\n\n🎭 *{}*\n\
             🔗 Collection: {}\n\
             📦 Items: {}\n\
             💰 Value: {:.2} ◎ / ${}\n\
             🏷️ Price: {:.2} ◎ / ${}",
            collection.name.as_deref().unwrap_or(NOT_AVAILABLE),
            collection.collection_address.as_deref().unwrap_or(NOT_AVAILABLE),
            collection.total_items,
            collection.value_sol,
            group_float(collection.value_usd),
            collection.price_sol,
            group_float(collection.price_usd),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = "J1S9H3QjnRtBbbuD4HjPV6RpRhwuk4zKbxsnCHuTgh9w";

    fn owner(address: &str, amount: u64) -> CollectionOwner {
        CollectionOwner {
            owner: Some(address.to_owned()),
            amount,
        }
    }

    #[test]
    fn test_collection_owners_message() {
        let owners = vec![
            owner("5B28C3kyz9qXv83z94Fd9aaaaaaaaaaaaaaaaaaa4Fd9", 12),
            owner("6T25g2abcdeF9bbbbbbbbbbbbbbbbbbbbbbbbbbbdeF9", 7),
        ];
        let chunks = format_collection_owners(COLLECTION, &owners);

        assert_eq!(chunks.len(), 1);
        let text = &chunks[0];
        assert!(text.starts_with("📦 *Top Owners of:* J1S9H3...gh9w"));
        assert!(text.contains("1️⃣\n👤 *Owner:* 5B28C3...4Fd9\n🎁 *NFTs:* 12"));
        assert!(text.contains("2️⃣\n👤 *Owner:* 6T25g2...deF9\n🎁 *NFTs:* 7"));
    }

    #[test]
    fn test_collection_owners_caps_at_ten() {
        let owners: Vec<CollectionOwner> = (0..15)
            .map(|i| owner(&format!("Wallet{i:038}"), i))
            .collect();
        let chunks = format_collection_owners(COLLECTION, &owners);
        let text = chunks.join("\n");

        assert!(text.contains("🔟"));
        assert!(!text.contains("*11.*"));
    }

    #[test]
    fn test_collection_owner_missing_fields() {
        let owners = vec![CollectionOwner {
            owner: None,
            amount: 0,
        }];
        let chunks = format_collection_owners(COLLECTION, &owners);
        assert!(chunks[0].contains("👤 *Owner:* N/A"));
        assert!(chunks[0].contains("🎁 *NFTs:* 0"));
    }

    #[test]
    fn test_nft_portfolio_message() {
        let portfolio: NftPortfolio = serde_json::from_value(serde_json::json!({
            "ownerAddress": "9xjT3kghPzAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAPzZZ",
            "totalSol": "12.5",
            "totalUsd": 2345.678,
            "totalNftCollectionCount": 2,
            "data": [{
                "name": "Mad Lads",
                "collectionAddress": "J1S9H3QjnRtBbbuD4HjPV6RpRhwuk4zKbxsnCHuTgh9w",
                "totalItems": 3,
                "valueSol": 150.5,
                "valueUsd": "21070.25",
                "priceSol": 50.1667,
                "priceUsd": 7023.42
            }]
        }))
        .unwrap();

        let text = format_nft_portfolio(&portfolio);
        assert!(text.contains("🪙 *Total SOL Value:* 12.50"));
        assert!(text.contains("💵 *Total USD Value:* $2,345.68"));
        assert!(text.contains("📚 *NFT Collections:* 2"));
        assert!(text.contains("🎭 *Mad Lads*"));
        assert!(text.contains("📦 Items: 3"));
        assert!(text.contains("💰 Value: 150.50 ◎ / $21,070.25"));
        assert!(text.contains("🏷️ Price: 50.17 ◎ / $7,023.42"));
    }

    #[test]
    fn test_nft_portfolio_without_collections() {
        let portfolio: NftPortfolio = serde_json::from_value(serde_json::json!({
            "ownerAddress": null,
            "totalSol": null
        }))
        .unwrap();

        let text = format_nft_portfolio(&portfolio);
        assert!(text.contains("👛 *Wallet:* N/A"));
        assert!(text.contains("🪙 *Total SOL Value:* 0.00"));
        assert!(text.ends_with("⚠️ No NFT collections found."));
    }
}
