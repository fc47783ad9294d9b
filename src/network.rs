//! Network keys and public block-explorer links.

use serde::{Deserialize, Serialize};

/// Networks the front end links out to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Polygon,
    Ethereum,
    Bsc,
}

impl Network {
    /// Resolve a network key. Unknown keys fall back to Polygon.
    pub fn from_key(key: &str) -> Self {
        match key {
            "ethereum" => Network::Ethereum,
            "bsc" => Network::Bsc,
            _ => Network::Polygon,
        }
    }

    /// Base URL for transaction pages on the network's explorer.
    pub fn explorer_tx_base(&self) -> &'static str {
        match self {
            Network::Polygon => "https://polygonscan.com/tx/",
            Network::Ethereum => "https://etherscan.io/tx/",
            Network::Bsc => "https://bscscan.com/tx/",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Polygon => write!(f, "polygon"),
            Network::Ethereum => write!(f, "ethereum"),
            Network::Bsc => write!(f, "bsc"),
        }
    }
}

/// Explorer link for a transaction hash. The hash is appended as-is, no
/// encoding.
pub fn explorer_tx_url(hash: &str, network: &str) -> String {
    format!("{}{}", Network::from_key(network).explorer_tx_base(), hash)
}
