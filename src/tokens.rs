//! Popular-token registry and symbol lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Symbol shown when an address is not in the registry.
pub const FALLBACK_SYMBOL: &str = "TOKEN";

// Polygon PoS token addresses the swap screen offers by default
pub const WMATIC: &str = "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270";
pub const USDC: &str = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174";
pub const USDT: &str = "0xc2132D05D31c914a87C6611C10748AEb04B58e8F";
pub const DAI: &str = "0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063";
pub const WETH: &str = "0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619";

/// Registry record for a listed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: String,
    pub symbol: String,
}

/// Default registry of popular Polygon tokens, keyed by symbol.
pub fn popular_tokens() -> HashMap<String, TokenInfo> {
    [
        ("WMATIC", WMATIC),
        ("USDC", USDC),
        ("USDT", USDT),
        ("DAI", DAI),
        ("WETH", WETH),
    ]
    .into_iter()
    .map(|(symbol, address)| {
        (
            symbol.to_string(),
            TokenInfo {
                address: address.to_string(),
                symbol: symbol.to_string(),
            },
        )
    })
    .collect()
}

/// Look up a token symbol by address, case-insensitively. Unknown
/// addresses resolve to [`FALLBACK_SYMBOL`].
pub fn token_symbol(address: &str, registry: &HashMap<String, TokenInfo>) -> String {
    registry
        .values()
        .find(|token| token.address.eq_ignore_ascii_case(address))
        .map(|token| token.symbol.clone())
        .unwrap_or_else(|| FALLBACK_SYMBOL.to_string())
}
