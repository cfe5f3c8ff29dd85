//! Display formatting for prices.

/// `R$ 1.234,50` style: two decimals, comma separator, dotted thousands.
pub fn format_price(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let int_part = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("R$ {}{},{:02}", sign, grouped, frac)
}

/// Promotional price line; absent or zero reads as no promotion.
pub fn format_promotional(value: Option<f64>) -> Option<String> {
    value.filter(|v| *v > 0.0).map(format_price)
}
