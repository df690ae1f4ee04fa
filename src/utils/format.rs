/// Format a value as whole currency units with comma thousands grouping
///
/// `format_currency(10027397.26, "Rp")` gives `Rp 10,027,397`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{} {}", symbol, group_thousands(value))
}

/// Round to an integer and insert a comma every three digits
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    // Non-finite values have no digits to group
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return rounded;
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if grouped == "0" {
        return grouped;
    }
    format!("{}{}", sign, grouped)
}

/// Percent with two decimals, e.g. `28.00%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}
