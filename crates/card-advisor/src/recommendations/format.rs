//! Rupee display helpers shared by explanations and reports.

/// Group digits in threes: `1500000` -> `1,500,000`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Whole-rupee rendering of a computed value, e.g. `-1234.6` -> `₹-1,235`.
pub fn format_rupees(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("₹{sign}{}", format_amount(rounded.abs() as u64))
}

/// Short form used in headlines: lakhs, thousands, or plain rupees.
pub fn format_compact_currency(value: f64) -> String {
    if value >= 100_000.0 {
        format!("₹{:.1}L", value / 100_000.0)
    } else if value >= 1_000.0 {
        format!("₹{:.1}K", value / 1_000.0)
    } else {
        format_rupees(value)
    }
}
