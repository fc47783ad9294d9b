//! Address and transaction-hash validation.

use alloy::primitives::Address;

/// Validate an Ethereum-style address. Single-case hex passes on format
/// alone; mixed-case input must carry a valid EIP-55 checksum.
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex_part) = address.strip_prefix("0x") else {
        return false;
    };

    if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        Address::parse_checksummed(address, None).is_ok()
    } else {
        true
    }
}

/// Validate transaction hash format: 0x prefix and 32 hex-encoded bytes.
pub fn is_valid_tx_hash(hash: &str) -> bool {
    hash.strip_prefix("0x")
        .map(|h| h.len() == 64 && h.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}
