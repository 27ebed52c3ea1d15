//! Display helpers for units and prices

use shared::UnitId;

/// Get display name for a unit
pub fn unit_display_name(unit: UnitId) -> String {
    format!("#{unit}")
}

/// Group thousands with spaces and append the currency: `135 000 руб.`
pub fn format_price(amount: u64, currency: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if currency.is_empty() {
        grouped
    } else {
        format!("{grouped} {currency}")
    }
}

/// Whole thousands, rounded down
pub fn price_in_thousands(amount: u64) -> u64 {
    amount / 1000
}

/// Position as `[x, y, z]` without trailing zeros
pub fn format_position(position: [f64; 3]) -> String {
    let parts: Vec<String> = position
        .iter()
        .map(|&v| if v == 0.0 { 0.0 } else { v })
        .map(|v| v.to_string())
        .collect();
    format!("[{}]", parts.join(", "))
}
