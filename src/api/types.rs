use alloy::primitives::U256;
use serde::{de, Deserialize, Deserializer};

// ============================================================================
// Response Types
// ============================================================================

/// Balance as reported by the backend. Both amounts are shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BalanceResult {
    pub address: String,
    pub balance_wei: String,
    pub balance_eth: String,
}

/// External (signed) transaction touching the searched address
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub from: String,
    // Empty for contract creations
    #[serde(default, deserialize_with = "string_or_null")]
    pub to: String,
    #[serde(deserialize_with = "wei_from_text")]
    pub value: U256,
    #[serde(alias = "timeStamp", deserialize_with = "u64_from_text")]
    pub timestamp: u64,
    #[serde(default, alias = "blockNumber", deserialize_with = "opt_u64_from_text")]
    pub block_number: Option<u64>,
}

/// Value transfer caused by contract execution
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InternalTransaction {
    pub hash: String,
    pub from: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub to: String,
    #[serde(deserialize_with = "wei_from_text")]
    pub value: U256,
    #[serde(alias = "blockNumber", deserialize_with = "u64_from_text")]
    pub block_number: u64,
}

// ============================================================================
// Field Decoders
// ============================================================================

/// Numeric fields arrive as decimal text, occasionally as bare JSON numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(u64),
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn wei_from_text<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => parse_wei(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid wei amount: {text:?}"))),
        TextOrNumber::Number(n) => Ok(U256::from(n)),
    }
}

fn u64_from_text<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected an unsigned integer, got {text:?}"))),
        TextOrNumber::Number(n) => Ok(n),
    }
}

/// Optional fields never fail the row: null, blank or non-numeric text is `None`
fn opt_u64_from_text<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text.trim().parse().ok(),
        Some(TextOrNumber::Number(n)) => Some(n),
        None => None,
    })
}

/// Parse a decimal wei amount. Rejects signs, fractions and hex.
pub fn parse_wei(text: &str) -> Option<U256> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(trimmed, 10).ok()
}
