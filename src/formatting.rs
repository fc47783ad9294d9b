//! Display-only formatting: prices, dashboard-scale numbers, addresses
//! and transaction hashes. Nothing here touches base units; see `units`
//! for amount conversions.

/// Characters kept at the start of a truncated address.
pub const ADDRESS_START_CHARS: usize = 6;

/// Characters kept at the end of a truncated address.
pub const ADDRESS_END_CHARS: usize = 4;

/// Format a price with magnitude suffixes above 1K and a floor label
/// below one millionth.
pub fn format_price(price: f64, decimals: usize) -> String {
    if price == 0.0 || price.is_nan() {
        return "0".to_string();
    }

    if price < 0.000_001 {
        return "< 0.000001".to_string();
    }
    if price >= 1_000_000.0 {
        return format!("{:.2}M", price / 1_000_000.0);
    }
    if price >= 1_000.0 {
        return format!("{:.2}K", price / 1_000.0);
    }

    format!("{:.1$}", price, decimals)
}

/// Compact notation for dashboard-scale numbers. The suffix is chosen by
/// absolute value, so the sign survives formatting.
pub fn format_large_number(num: f64) -> String {
    if num == 0.0 || num.is_nan() {
        return "0".to_string();
    }

    let magnitude = num.abs();

    if magnitude >= 1e12 {
        format!("{:.2}T", num / 1e12)
    } else if magnitude >= 1e9 {
        format!("{:.2}B", num / 1e9)
    } else if magnitude >= 1e6 {
        format!("{:.2}M", num / 1e6)
    } else if magnitude >= 1e3 {
        format!("{:.2}K", num / 1e3)
    } else {
        format!("{:.2}", num)
    }
}

/// Format a percentage value for display.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Shorten an address for display, keeping the start and end. Strings no
/// longer than the kept parts pass through unchanged.
pub fn truncate_address(address: &str, start_chars: usize, end_chars: usize) -> String {
    if address.is_empty() {
        return String::new();
    }

    let len = address.chars().count();
    if len <= start_chars + end_chars {
        return address.to_string();
    }

    let start: String = address.chars().take(start_chars).collect();
    let end: String = address.chars().skip(len - end_chars).collect();
    format!("{}...{}", start, end)
}

/// Shorten a transaction hash for display, fixed widths.
pub fn format_tx_hash(hash: &str) -> String {
    if hash.is_empty() {
        return String::new();
    }

    let len = hash.chars().count();
    let start: String = hash.chars().take(10).collect();
    let end: String = hash.chars().skip(len.saturating_sub(8)).collect();
    format!("{}...{}", start, end)
}

/// Percentage change from `old_value` to `new_value`. A zero baseline
/// reads as no change.
pub fn calculate_percentage_change(old_value: f64, new_value: f64) -> f64 {
    if old_value == 0.0 || old_value.is_nan() {
        return 0.0;
    }

    (new_value - old_value) / old_value * 100.0
}
