//! Cart Formatting Helpers
//!
//! Small, pure functions used by the checkout flow and the demo binary.

use super::models::CartLine;

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Smart Fitness Watch, 1x Designer Desk Lamp"`.
pub fn format_line_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a money amount with two decimal places, e.g. `"$249.99"`.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}
