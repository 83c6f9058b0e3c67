//! Display helpers for the product table.

use crate::product::Price;

/// Stock level below which a row is highlighted.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// `$1,234.56` style rendering.
pub fn format_currency(price: Price) -> String {
    let cents = price.cents();
    let whole = group_thousands(cents / 100);
    format!("${whole}.{:02}", cents % 100)
}

/// Low-stock rows are highlighted, never restricted.
pub fn is_low_stock(stock: i64, threshold: i64) -> bool {
    stock < threshold
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
