//! Conversions between on-chain base units and the decimal strings the UI
//! shows, plus the base-unit arithmetic built on top of them (slippage,
//! balance checks).
//!
//! The `try_*` functions surface failures as [`AmountError`]; their
//! unprefixed counterparts log the failure and return a safe default, so
//! render paths never have to unwrap anything.

use alloy::primitives::utils::{format_units, parse_units, UnitsError};
use alloy::primitives::U256;
use tracing::warn;

/// ERC-20 default when a token does not report its own decimals.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Decimal places shown by default in balances and swap previews.
pub const DEFAULT_DISPLAY_DECIMALS: usize = 4;

/// Positive amounts below this render as "< 0.0001" instead of a
/// misleading "0.0000".
const DUST_DISPLAY_FLOOR: f64 = 0.0001;

/// Conversion failure on the fallible amount paths.
#[derive(Debug, thiserror::Error)]
pub enum AmountError {
    #[error("invalid base-unit amount: {0:?}")]
    BaseUnits(String),

    #[error("negative amounts are not supported")]
    Negative,

    #[error("slippage percent out of range: {0}")]
    SlippageOutOfRange(f64),

    #[error("amount overflows 256 bits")]
    Overflow,

    #[error(transparent)]
    Units(#[from] UnitsError),
}

/// Fallible version of [`format_token_amount`].
pub fn try_format_token_amount(
    amount: &str,
    decimals: u8,
    display_decimals: usize,
) -> Result<String, AmountError> {
    let amount = amount.trim();
    if amount.is_empty() || amount == "0" {
        return Ok("0".to_string());
    }

    let base_units = amount
        .parse::<U256>()
        .map_err(|_| AmountError::BaseUnits(amount.to_string()))?;

    try_format_token_units(base_units, decimals, display_decimals)
}

/// Fallible version of [`format_token_units`].
pub fn try_format_token_units(
    amount: U256,
    decimals: u8,
    display_decimals: usize,
) -> Result<String, AmountError> {
    let readable = format_units(amount, decimals)?;
    let value = readable.parse::<f64>().unwrap_or(0.0);

    if value == 0.0 {
        return Ok("0".to_string());
    }
    if value < DUST_DISPLAY_FLOOR {
        return Ok("< 0.0001".to_string());
    }

    Ok(format!("{:.1$}", value, display_decimals))
}

/// Format a base-unit amount (decimal string) for display. Malformed
/// input formats as "0".
pub fn format_token_amount(amount: &str, decimals: u8, display_decimals: usize) -> String {
    try_format_token_amount(amount, decimals, display_decimals).unwrap_or_else(|err| {
        warn!("failed to format token amount {:?}: {}", amount, err);
        "0".to_string()
    })
}

/// Format a base-unit amount already held as a [`U256`].
pub fn format_token_units(amount: U256, decimals: u8, display_decimals: usize) -> String {
    try_format_token_units(amount, decimals, display_decimals).unwrap_or_else(|err| {
        warn!("failed to format token units {}: {}", amount, err);
        "0".to_string()
    })
}

/// Fallible version of [`parse_token_amount`]. Empty input is zero, not
/// an error; negative input is rejected.
pub fn try_parse_token_amount(amount: &str, decimals: u8) -> Result<U256, AmountError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Ok(U256::ZERO);
    }

    let parsed = parse_units(amount, decimals)?;
    if parsed.is_negative() {
        return Err(AmountError::Negative);
    }

    Ok(parsed.get_absolute())
}

/// Parse a human-readable decimal amount into base units. Malformed
/// input parses as zero.
pub fn parse_token_amount(amount: &str, decimals: u8) -> U256 {
    try_parse_token_amount(amount, decimals).unwrap_or_else(|err| {
        warn!("failed to parse token amount {:?}: {}", amount, err);
        U256::ZERO
    })
}

/// Fallible version of [`calculate_slippage`].
pub fn try_calculate_slippage(
    amount: &str,
    slippage_percent: f64,
    decimals: u8,
) -> Result<U256, AmountError> {
    let base_units = try_parse_token_amount(amount, decimals)?;

    // The multiplier is truncated to whole percentage points before
    // scaling, so 0.5% slippage scales by 99/100.
    let multiplier = (100.0 - slippage_percent).floor();
    if !(0.0..=100.0).contains(&multiplier) {
        return Err(AmountError::SlippageOutOfRange(slippage_percent));
    }

    let scaled = base_units
        .checked_mul(U256::from(multiplier as u64))
        .ok_or(AmountError::Overflow)?;

    Ok(scaled / U256::from(100u64))
}

/// Minimum acceptable output after applying a slippage tolerance, in base
/// units. Malformed input or an out-of-range percentage yields zero.
pub fn calculate_slippage(amount: &str, slippage_percent: f64, decimals: u8) -> U256 {
    try_calculate_slippage(amount, slippage_percent, decimals).unwrap_or_else(|err| {
        warn!("failed to calculate slippage for {:?}: {}", amount, err);
        U256::ZERO
    })
}

/// True when `balance` covers `amount`. Missing or malformed input is
/// treated as insufficient.
pub fn has_sufficient_balance(amount: &str, balance: &str, decimals: u8) -> bool {
    if amount.trim().is_empty() || balance.trim().is_empty() {
        return false;
    }

    match (
        try_parse_token_amount(amount, decimals),
        try_parse_token_amount(balance, decimals),
    ) {
        (Ok(amount), Ok(balance)) => balance >= amount,
        (Err(err), _) | (_, Err(err)) => {
            warn!("failed to compare amount against balance: {}", err);
            false
        }
    }
}
